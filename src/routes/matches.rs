use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{Matcher, GroupingOptions};
use crate::error::MatchingError;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, PairRequest,
    WeeklyGroupsRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
    pub max_limit: u16,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            default_limit: 10,
            max_limit: 100,
        }
    }
}

/// Configure all matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/analyze", web::post().to(analyze_pair))
        .route("/matches/find", web::post().to(find_matches))
        .route("/groups/weekly", web::post().to(weekly_groups));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a pair
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// { "profileA": { ... }, "profileB": { ... } }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<PairRequest>,
) -> impl Responder {
    match state.matcher.score(&req.profile_a, &req.profile_b) {
        Ok(score) => {
            tracing::debug!(
                "Scored {} vs {}: {}",
                req.profile_a.id,
                req.profile_b.id,
                score.overall
            );
            HttpResponse::Ok().json(score)
        }
        Err(e) => bad_request("Invalid profiles", e),
    }
}

/// Score and explain a pair
///
/// POST /api/v1/compatibility/analyze
async fn analyze_pair(
    state: web::Data<AppState>,
    req: web::Json<PairRequest>,
) -> impl Responder {
    match state.matcher.analyze(&req.profile_a, &req.profile_b) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => bad_request("Invalid profiles", e),
    }
}

/// Rank candidates for one profile
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// { "profile": { ... }, "candidates": [ ... ], "limit": 10 }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit to keep responses bounded
    let limit = req.limit.unwrap_or(state.default_limit).min(state.max_limit) as usize;

    tracing::info!(
        "Finding matches for profile: {}, limit: {}, candidates: {}",
        req.profile.id,
        limit,
        req.candidates.len()
    );

    match state.matcher.find_matches(&req.profile, &req.candidates, limit) {
        Ok(result) => HttpResponse::Ok().json(FindMatchesResponse {
            matches: result.matches,
            total_candidates: result.total_candidates,
        }),
        Err(e) => bad_request("Invalid candidate pool", e),
    }
}

/// Run weekly group formation
///
/// POST /api/v1/groups/weekly
///
/// Request body:
/// ```json
/// { "profiles": [ ... ], "capacity": 4, "keepSingletons": false, "minScore": 0.0 }
/// ```
async fn weekly_groups(
    state: web::Data<AppState>,
    req: web::Json<WeeklyGroupsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let defaults = state.matcher.grouping_options();
    let options = GroupingOptions {
        capacity: req.capacity.unwrap_or(defaults.capacity),
        keep_singletons: req.keep_singletons.unwrap_or(defaults.keep_singletons),
        min_score: req.min_score.unwrap_or(defaults.min_score),
    };

    match state.matcher.run_weekly(&req.profiles, Some(options)) {
        Ok(run) => HttpResponse::Ok().json(run),
        Err(e) => {
            tracing::warn!("Weekly group formation rejected: {}", e);
            bad_request("Invalid group formation request", e)
        }
    }
}

fn bad_request(error: &str, e: MatchingError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: e.to_string(),
        status_code: 400,
    })
}
