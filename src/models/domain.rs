use serde::{Deserialize, Serialize};

/// Physician profile as supplied by the eligibility collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(rename = "careerStage")]
    pub career_stage: String,
    #[serde(rename = "specialtyPreference", default)]
    pub specialty_preference: SpecialtyPreference,
    #[serde(default)]
    pub institutions: Vec<Institution>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub gender: String,
    #[serde(rename = "genderPreference", default)]
    pub gender_preference: String,
    #[serde(default)]
    pub age: Option<u8>,
}

impl Profile {
    /// True when the identifier is present and not just whitespace
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Training or employment institution attached to a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Whether a physician wants to meet peers from their own specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialtyPreference {
    #[serde(alias = "same_specialty")]
    Same,
    #[serde(alias = "different_specialties", alias = "different_specialty")]
    Different,
    #[default]
    #[serde(alias = "no-preference")]
    NoPreference,
}

/// Compatibility of two profiles, rounded for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub overall: f64,
    pub specialty: f64,
    pub career: f64,
    pub location: f64,
    pub institution: f64,
    pub demographics: f64,
    pub breakdown: ScoreBreakdown,
}

/// Unrounded dimension values kept for auditing and explanation
///
/// `specialty` is the raw value before preference weighting;
/// `weighted_specialty` is what entered the overall blend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub specialty: f64,
    pub preference_multiplier: f64,
    pub weighted_specialty: f64,
    pub career: f64,
    pub location: f64,
    pub institution: f64,
    pub demographics: f64,
}

/// Scored and explained pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResult {
    pub profile_a: Profile,
    pub profile_b: Profile,
    pub score: CompatibilityScore,
    pub match_reasons: Vec<String>,
    pub potential_issues: Vec<String>,
}

/// Members assembled around one anchor during group formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub anchor_id: String,
    pub member_ids: Vec<String>,
    /// Mean anchor-to-member overall score, 0.0 for a singleton
    pub average_score: f64,
}

impl Group {
    pub fn len(&self) -> usize {
        self.member_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member_ids.is_empty()
    }
}

/// Outcome of one group formation pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupFormation {
    pub groups: Vec<Group>,
    /// Profiles that ended a run without a retained group
    pub unassigned: Vec<String>,
}

/// Weekly batch wrapper handed back to the persistence collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMatchRun {
    pub run_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub week_of: chrono::NaiveDate,
    pub total_candidates: usize,
    pub groups: Vec<Group>,
    pub unassigned: Vec<String>,
}

/// Linear blend of the five dimensions
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoringWeights {
    pub specialty: f64,
    pub career: f64,
    pub location: f64,
    pub institution: f64,
    pub demographics: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.specialty + self.career + self.location + self.institution + self.demographics
    }
}

/// Fixed production weights; not exposed through configuration
pub const DIMENSION_WEIGHTS: ScoringWeights = ScoringWeights {
    specialty: 0.35,
    career: 0.25,
    location: 0.20,
    institution: 0.10,
    demographics: 0.10,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        DIMENSION_WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DIMENSION_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_preference_deserialization() {
        let same: SpecialtyPreference = serde_json::from_str("\"same_specialty\"").unwrap();
        let different: SpecialtyPreference = serde_json::from_str("\"different\"").unwrap();
        let none: SpecialtyPreference = serde_json::from_str("\"no-preference\"").unwrap();

        assert_eq!(same, SpecialtyPreference::Same);
        assert_eq!(different, SpecialtyPreference::Different);
        assert_eq!(none, SpecialtyPreference::NoPreference);
    }

    #[test]
    fn test_profile_defaults() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": "p1", "careerStage": "resident"}"#,
        )
        .unwrap();

        assert!(profile.specialties.is_empty());
        assert!(profile.institutions.is_empty());
        assert_eq!(profile.specialty_preference, SpecialtyPreference::NoPreference);
        assert_eq!(profile.age, None);
    }

    #[test]
    fn test_blank_id_is_missing() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": "   ", "careerStage": "resident"}"#,
        )
        .unwrap();

        assert!(!profile.has_id());
    }
}
