use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};

use crate::core::{
    explain::analyze_match,
    grouping::{form_groups, validate_pool, GroupingOptions},
    scoring::{calculate_compatibility, raw_overall},
    taxonomy::Taxonomy,
};
use crate::error::MatchingError;
use crate::models::{CompatibilityScore, GroupFormation, MatchingResult, Profile, WeeklyMatchRun};

/// Result of ranking candidates for a single profile
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<MatchingResult>,
    pub total_candidates: usize,
}

/// Main matching orchestrator
///
/// Owns the lookup tables and the default grouping options. Clones share
/// the tables; calls only read the profiles they are given.
#[derive(Debug, Clone)]
pub struct Matcher {
    taxonomy: Arc<Taxonomy>,
    grouping: GroupingOptions,
    max_pool_size: Option<usize>,
}

impl Matcher {
    pub fn new(grouping: GroupingOptions, max_pool_size: Option<usize>) -> Self {
        Self {
            taxonomy: Arc::new(Taxonomy::standard()),
            grouping,
            max_pool_size,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(GroupingOptions::default(), None)
    }

    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = Arc::new(taxonomy);
        self
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn grouping_options(&self) -> GroupingOptions {
        self.grouping
    }

    /// Score a single pair
    pub fn score(&self, a: &Profile, b: &Profile) -> Result<CompatibilityScore, MatchingError> {
        ensure_ids(a, b)?;
        Ok(calculate_compatibility(a, b, &self.taxonomy))
    }

    /// Score and explain a single pair
    pub fn analyze(&self, a: &Profile, b: &Profile) -> Result<MatchingResult, MatchingError> {
        let score = self.score(a, b)?;
        Ok(analyze_match(a, b, score))
    }

    /// Rank candidates for one profile
    ///
    /// The profile itself is skipped if present and not counted in
    /// `total_candidates`. Results are ordered by unrounded overall score,
    /// best first, and truncated to `limit`.
    pub fn find_matches(
        &self,
        profile: &Profile,
        candidates: &[Profile],
        limit: usize,
    ) -> Result<MatchResult, MatchingError> {
        if !profile.has_id() {
            return Err(MatchingError::MissingProfileId);
        }
        self.check_pool_size(candidates.len())?;
        validate_pool(candidates)?;

        let mut scored: Vec<(f64, MatchingResult)> = candidates
            .iter()
            .filter(|candidate| candidate.id != profile.id)
            .map(|candidate| {
                let score = calculate_compatibility(profile, candidate, &self.taxonomy);
                let rank = raw_overall(&score.breakdown);
                (rank, analyze_match(profile, candidate, score))
            })
            .collect();

        let total_candidates = scored.len();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);

        Ok(MatchResult {
            matches: scored.into_iter().map(|(_, result)| result).collect(),
            total_candidates,
        })
    }

    /// Form groups with explicit options
    pub fn form_groups(
        &self,
        pool: &[Profile],
        options: &GroupingOptions,
    ) -> Result<GroupFormation, MatchingError> {
        self.check_pool_size(pool.len())?;
        form_groups(pool, options, &self.taxonomy)
    }

    /// Run the weekly grouping pass over an eligible pool
    ///
    /// `options` overrides the matcher's configured grouping options.
    pub fn run_weekly(
        &self,
        pool: &[Profile],
        options: Option<GroupingOptions>,
    ) -> Result<WeeklyMatchRun, MatchingError> {
        let options = options.unwrap_or(self.grouping);
        let generated_at = Utc::now();

        tracing::info!(
            "Starting weekly group formation over {} profiles (capacity {})",
            pool.len(),
            options.capacity
        );

        let formation = self.form_groups(pool, &options)?;

        let run = WeeklyMatchRun {
            run_id: uuid::Uuid::new_v4(),
            generated_at,
            week_of: week_start(generated_at.date_naive()),
            total_candidates: pool.len(),
            groups: formation.groups,
            unassigned: formation.unassigned,
        };

        tracing::info!(
            "Weekly run {} formed {} groups, {} profiles unassigned",
            run.run_id,
            run.groups.len(),
            run.unassigned.len()
        );

        Ok(run)
    }

    fn check_pool_size(&self, size: usize) -> Result<(), MatchingError> {
        match self.max_pool_size {
            Some(max) if size > max => Err(MatchingError::PoolTooLarge { size, max }),
            _ => Ok(()),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn ensure_ids(a: &Profile, b: &Profile) -> Result<(), MatchingError> {
    if a.has_id() && b.has_id() {
        Ok(())
    } else {
        Err(MatchingError::MissingProfileId)
    }
}

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - chrono::Duration::days(offset)
}
