use crate::core::{
    dimensions::{career_score, demographics_score, institution_score, location_score, specialty_score},
    preference::{apply_preference_weighting, preference_multiplier},
    taxonomy::Taxonomy,
};
use crate::models::{CompatibilityScore, Profile, ScoreBreakdown, DIMENSION_WEIGHTS};

/// Calculate the compatibility (0-1) of two profiles
///
/// Scoring formula:
/// overall = (
///     specialty * 0.35 +       # after preference weighting
///     career * 0.25 +
///     location * 0.20 +
///     institution * 0.10 +
///     demographics * 0.10
/// )
///
/// Reported values are rounded to two decimals; the breakdown keeps the
/// unrounded inputs.
pub fn calculate_compatibility(a: &Profile, b: &Profile, taxonomy: &Taxonomy) -> CompatibilityScore {
    let breakdown = calculate_breakdown(a, b, taxonomy);

    CompatibilityScore {
        overall: round2(raw_overall(&breakdown)),
        specialty: round2(breakdown.weighted_specialty),
        career: round2(breakdown.career),
        location: round2(breakdown.location),
        institution: round2(breakdown.institution),
        demographics: round2(breakdown.demographics),
        breakdown,
    }
}

/// Unrounded per-dimension values for a pair
pub fn calculate_breakdown(a: &Profile, b: &Profile, taxonomy: &Taxonomy) -> ScoreBreakdown {
    let specialty = specialty_score(&a.specialties, &b.specialties, taxonomy);
    let preference_multiplier = preference_multiplier(
        a.specialty_preference,
        b.specialty_preference,
        &a.specialties,
        &b.specialties,
    );

    ScoreBreakdown {
        specialty,
        preference_multiplier,
        weighted_specialty: apply_preference_weighting(
            specialty,
            a.specialty_preference,
            b.specialty_preference,
            &a.specialties,
            &b.specialties,
        ),
        career: career_score(&a.career_stage, &b.career_stage, taxonomy),
        location: location_score(&a.city, &b.city),
        institution: institution_score(&a.institutions, &b.institutions),
        demographics: demographics_score(a, b),
    }
}

/// Weighted blend of a breakdown, unrounded
pub fn raw_overall(breakdown: &ScoreBreakdown) -> f64 {
    let weights = DIMENSION_WEIGHTS;
    (breakdown.weighted_specialty * weights.specialty
        + breakdown.career * weights.career
        + breakdown.location * weights.location
        + breakdown.institution * weights.institution
        + breakdown.demographics * weights.demographics)
        .clamp(0.0, 1.0)
}

#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
