use std::collections::HashSet;

use crate::models::SpecialtyPreference;

const PREFERENCE_MET: f64 = 1.3;
const PREFERENCE_UNMET: f64 = 0.7;
const OPPOSING_PREFERENCES: f64 = 0.9;
const NEUTRAL: f64 = 1.0;

/// Multiplier applied to the specialty dimension for a pair's stated preferences
///
/// Matching same/same or different/different preferences scale by 1.3 when
/// satisfied and 0.7 when not. Opposite directions take 0.9. Anything
/// involving `NoPreference` is 1.0.
pub fn preference_multiplier(
    pref_a: SpecialtyPreference,
    pref_b: SpecialtyPreference,
    specialties_a: &[String],
    specialties_b: &[String],
) -> f64 {
    use SpecialtyPreference::*;

    match (pref_a, pref_b) {
        (Same, Same) => {
            if shares_specialty(specialties_a, specialties_b) {
                PREFERENCE_MET
            } else {
                PREFERENCE_UNMET
            }
        }
        (Different, Different) => {
            if has_distinct_specialty(specialties_a, specialties_b) {
                PREFERENCE_MET
            } else {
                PREFERENCE_UNMET
            }
        }
        (Same, Different) | (Different, Same) => OPPOSING_PREFERENCES,
        (NoPreference, _) | (_, NoPreference) => NEUTRAL,
    }
}

/// Weight a raw specialty score, keeping the result within 0.0..=1.0
pub fn apply_preference_weighting(
    specialty_score: f64,
    pref_a: SpecialtyPreference,
    pref_b: SpecialtyPreference,
    specialties_a: &[String],
    specialties_b: &[String],
) -> f64 {
    let multiplier = preference_multiplier(pref_a, pref_b, specialties_a, specialties_b);
    (specialty_score * multiplier).clamp(0.0, 1.0)
}

/// At least one label appears in both lists
pub fn shares_specialty(a: &[String], b: &[String]) -> bool {
    a.iter().any(|s| b.contains(s))
}

/// At least one label is in one list but missing from the other
fn has_distinct_specialty(a: &[String], b: &[String]) -> bool {
    let left: HashSet<&String> = a.iter().collect();
    let right: HashSet<&String> = b.iter().collect();
    left.symmetric_difference(&right).next().is_some()
}
