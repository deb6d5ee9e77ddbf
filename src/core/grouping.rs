use std::collections::HashSet;

use crate::core::{
    scoring::{calculate_breakdown, raw_overall, round2},
    taxonomy::Taxonomy,
};
use crate::error::MatchingError;
use crate::models::{Group, GroupFormation, Profile};

pub const DEFAULT_GROUP_CAPACITY: usize = 4;

/// Knobs for a group formation pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingOptions {
    /// Maximum members per group, anchor included
    pub capacity: usize,
    /// Emit an anchor that attracted no candidates as its own group.
    /// Only consulted when `capacity > 1`.
    pub keep_singletons: bool,
    /// Candidates scoring below this against the anchor are skipped
    pub min_score: f64,
}

impl GroupingOptions {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), MatchingError> {
        if self.capacity < 1 {
            return Err(MatchingError::InvalidCapacity(self.capacity));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(MatchingError::InvalidMinScore(self.min_score));
        }
        Ok(())
    }
}

impl Default for GroupingOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_GROUP_CAPACITY,
            keep_singletons: false,
            min_score: 0.0,
        }
    }
}

/// Reject pools with blank or repeated identifiers
pub fn validate_pool(pool: &[Profile]) -> Result<(), MatchingError> {
    let mut seen = HashSet::with_capacity(pool.len());
    for profile in pool {
        if !profile.has_id() {
            return Err(MatchingError::MissingProfileId);
        }
        if !seen.insert(profile.id.as_str()) {
            return Err(MatchingError::DuplicateProfileId(profile.id.clone()));
        }
    }
    Ok(())
}

/// Greedily assemble capacity-bounded groups
///
/// Anchors are taken in input order. Each anchor is scored against every
/// still-unassigned profile and joined by the best `capacity - 1` of them
/// (ties keep input order). Anchors and members are assigned for the rest
/// of the run, so no profile lands in two groups.
pub fn form_groups(
    pool: &[Profile],
    options: &GroupingOptions,
    taxonomy: &Taxonomy,
) -> Result<GroupFormation, MatchingError> {
    options.validate()?;
    validate_pool(pool)?;

    let mut assigned = vec![false; pool.len()];
    let mut formation = GroupFormation::default();

    for anchor_idx in 0..pool.len() {
        if assigned[anchor_idx] {
            continue;
        }
        assigned[anchor_idx] = true;
        let anchor = &pool[anchor_idx];

        let mut candidates: Vec<(usize, f64)> = pool
            .iter()
            .enumerate()
            .filter(|(idx, _)| !assigned[*idx])
            .map(|(idx, candidate)| {
                (idx, raw_overall(&calculate_breakdown(anchor, candidate, taxonomy)))
            })
            .filter(|(_, score)| *score >= options.min_score)
            .collect();

        // Stable sort keeps input order among equal scores
        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates.truncate(options.capacity - 1);

        if candidates.is_empty() && options.capacity > 1 && !options.keep_singletons {
            tracing::debug!("Dropping singleton group for anchor {}", anchor.id);
            formation.unassigned.push(anchor.id.clone());
            continue;
        }

        let average_score = if candidates.is_empty() {
            0.0
        } else {
            candidates.iter().map(|(_, score)| score).sum::<f64>() / candidates.len() as f64
        };

        let mut member_ids = Vec::with_capacity(candidates.len() + 1);
        member_ids.push(anchor.id.clone());
        for (idx, _) in &candidates {
            assigned[*idx] = true;
            member_ids.push(pool[*idx].id.clone());
        }

        tracing::debug!(
            "Formed group of {} around anchor {} (average score {:.2})",
            member_ids.len(),
            anchor.id,
            average_score
        );

        formation.groups.push(Group {
            anchor_id: anchor.id.clone(),
            member_ids,
            average_score: round2(average_score),
        });
    }

    Ok(formation)
}
