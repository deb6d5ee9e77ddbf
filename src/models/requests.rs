use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Profile;

/// Request to score (or analyze) a single pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PairRequest {
    #[serde(alias = "profile_a", rename = "profileA")]
    pub profile_a: Profile,
    #[serde(alias = "profile_b", rename = "profileB")]
    pub profile_b: Profile,
}

/// Request to rank candidates for one profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    pub profile: Profile,
    #[validate(length(min = 1))]
    pub candidates: Vec<Profile>,
    /// Falls back to the configured default when omitted
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to run weekly group formation over an eligible pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct WeeklyGroupsRequest {
    pub profiles: Vec<Profile>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub capacity: Option<usize>,
    #[serde(alias = "keep_singletons", rename = "keepSingletons", default)]
    pub keep_singletons: Option<bool>,
    #[serde(alias = "min_score", rename = "minScore", default)]
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_score: Option<f64>,
}
