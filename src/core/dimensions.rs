use crate::core::taxonomy::Taxonomy;
use crate::models::{Institution, Profile};

const EXACT_SPECIALTY: f64 = 1.0;
const RELATED_SPECIALTY: f64 = 0.7;
const SAME_CATEGORY: f64 = 0.4;
const UNRELATED_SPECIALTY: f64 = 0.1;

const SAME_CITY: f64 = 1.0;
/// Flat score for any two distinct cities; there is no geodistance yet
const DIFFERENT_CITY: f64 = 0.3;

const SAME_INSTITUTION: f64 = 1.0;
const INSTITUTION_SAME_CITY: f64 = 0.6;
const INSTITUTION_SAME_COUNTRY: f64 = 0.3;
const UNRELATED_INSTITUTION: f64 = 0.1;
const NO_INSTITUTION_DATA: f64 = 0.5;

const DEMOGRAPHICS_BASE: f64 = 0.5;

/// Calculate specialty score (0-1)
///
/// Mean over every cross pair: exact label 1.0, related 0.7,
/// same category 0.4, otherwise 0.1. Either side empty scores 0.0.
pub fn specialty_score(a: &[String], b: &[String], taxonomy: &Taxonomy) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let total: f64 = a
        .iter()
        .flat_map(|left| b.iter().map(move |right| (left, right)))
        .map(|(left, right)| specialty_pair_score(left, right, taxonomy))
        .sum();

    total / (a.len() * b.len()) as f64
}

#[inline]
fn specialty_pair_score(a: &str, b: &str, taxonomy: &Taxonomy) -> f64 {
    if a == b {
        EXACT_SPECIALTY
    } else if taxonomy.is_related(a, b) {
        RELATED_SPECIALTY
    } else if taxonomy.category_of(a) == taxonomy.category_of(b) {
        SAME_CATEGORY
    } else {
        UNRELATED_SPECIALTY
    }
}

/// Calculate career stage score (0-1) from `a`'s row of the weight table
#[inline]
pub fn career_score(a: &str, b: &str, taxonomy: &Taxonomy) -> f64 {
    taxonomy.career_weight(a, b)
}

/// Calculate location score (0-1)
///
/// Same city (case-insensitive) is 1.0, anything else a flat 0.3.
#[inline]
pub fn location_score(a: &str, b: &str) -> f64 {
    if a.to_lowercase() == b.to_lowercase() {
        SAME_CITY
    } else {
        DIFFERENT_CITY
    }
}

/// Calculate institution score (0-1)
///
/// Mean over cross pairs of same name 1.0, same city 0.6, same country 0.3,
/// otherwise 0.1. Unlike specialties, a missing list is neutral (0.5).
pub fn institution_score(a: &[Institution], b: &[Institution]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return NO_INSTITUTION_DATA;
    }

    let total: f64 = a
        .iter()
        .flat_map(|left| b.iter().map(move |right| (left, right)))
        .map(|(left, right)| institution_pair_score(left, right))
        .sum();

    total / (a.len() * b.len()) as f64
}

#[inline]
fn institution_pair_score(a: &Institution, b: &Institution) -> f64 {
    if eq_ignore_case(&a.name, &b.name) {
        SAME_INSTITUTION
    } else if eq_ignore_case(&a.city, &b.city) {
        INSTITUTION_SAME_CITY
    } else if eq_ignore_case(&a.country, &b.country) {
        INSTITUTION_SAME_COUNTRY
    } else {
        UNRELATED_INSTITUTION
    }
}

/// Calculate demographics score (0-1)
///
/// Base 0.5, plus an age closeness bonus when both ages are known, plus a
/// gender preference bonus: 0.2 if either side has no preference, else 0.3
/// when both state the same preference (case-insensitive).
pub fn demographics_score(a: &Profile, b: &Profile) -> f64 {
    let mut score = DEMOGRAPHICS_BASE;

    if let (Some(age_a), Some(age_b)) = (a.age, b.age) {
        score += age_bonus(age_a.abs_diff(age_b));
    }

    if is_no_preference(&a.gender_preference) || is_no_preference(&b.gender_preference) {
        score += 0.2;
    } else if eq_ignore_case(&a.gender_preference, &b.gender_preference) {
        score += 0.3;
    }

    score.min(1.0)
}

#[inline]
fn age_bonus(difference: u8) -> f64 {
    match difference {
        0..=5 => 0.3,
        6..=10 => 0.2,
        11..=15 => 0.1,
        _ => 0.0,
    }
}

/// Accepts both `no_preference` and `no-preference`
#[inline]
pub fn is_no_preference(value: &str) -> bool {
    let normalized = value.trim().to_lowercase().replace('-', "_");
    normalized == "no_preference"
}

#[inline]
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
