use crate::core::dimensions::eq_ignore_case;
use crate::models::{CompatibilityScore, MatchingResult, Profile};

/// Build reasons-to-match and potential issues for a scored pair
///
/// Rules run in a fixed order (shared specialties, specialty, career,
/// location, institution, overall) and each fires at most once.
pub fn analyze_match(a: &Profile, b: &Profile, score: CompatibilityScore) -> MatchingResult {
    let mut reasons = Vec::new();
    let mut issues = Vec::new();
    let breakdown = &score.breakdown;

    let shared: Vec<&str> = a
        .specialties
        .iter()
        .filter(|s| b.specialties.contains(*s))
        .map(String::as_str)
        .collect();
    if !shared.is_empty() {
        reasons.push(format!("Shared specialties: {}", shared.join(", ")));
    }

    if breakdown.specialty > 0.7 {
        reasons.push("High specialty compatibility".to_string());
    } else if breakdown.specialty < 0.3 {
        issues.push("Low specialty compatibility".to_string());
    }

    if breakdown.career > 0.8 {
        reasons.push("Similar career stages".to_string());
    } else if breakdown.career < 0.4 {
        issues.push("Different career stages".to_string());
    }

    if eq_ignore_case(&a.city, &b.city) {
        reasons.push("Same city — easy to meet".to_string());
    } else if breakdown.location > 0.5 {
        reasons.push("Nearby locations".to_string());
    } else {
        issues.push("Different cities — meeting in person may be harder".to_string());
    }

    let shared_institution = a
        .institutions
        .iter()
        .any(|left| b.institutions.iter().any(|right| eq_ignore_case(&left.name, &right.name)));
    if shared_institution {
        reasons.push("Shared institutional background".to_string());
    }

    if score.overall > 0.8 {
        reasons.push("Excellent overall compatibility".to_string());
    } else if score.overall < 0.5 {
        issues.push("Low overall compatibility".to_string());
    }

    MatchingResult {
        profile_a: a.clone(),
        profile_b: b.clone(),
        score,
        match_reasons: reasons,
        potential_issues: issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{scoring::calculate_compatibility, taxonomy::Taxonomy};
    use crate::models::{Institution, SpecialtyPreference};

    fn create_test_profile(id: &str, specialty: &str, stage: &str, city: &str) -> Profile {
        Profile {
            id: id.to_string(),
            specialties: vec![specialty.to_string()],
            career_stage: stage.to_string(),
            specialty_preference: SpecialtyPreference::NoPreference,
            institutions: vec![],
            city: city.to_string(),
            gender: "male".to_string(),
            gender_preference: "no_preference".to_string(),
            age: Some(40),
        }
    }

    fn explain(a: &Profile, b: &Profile) -> MatchingResult {
        let score = calculate_compatibility(a, b, &Taxonomy::standard());
        analyze_match(a, b, score)
    }

    #[test]
    fn test_strong_pair_reasons_in_order() {
        let a = create_test_profile("a", "Cardiology", "attending_5_plus", "New York");
        let b = create_test_profile("b", "Cardiology", "attending_5_plus", "new york");

        let result = explain(&a, &b);

        assert_eq!(
            result.match_reasons,
            vec![
                "Shared specialties: Cardiology",
                "High specialty compatibility",
                "Similar career stages",
                "Same city — easy to meet",
                "Excellent overall compatibility",
            ]
        );
        assert!(result.potential_issues.is_empty());
    }

    #[test]
    fn test_weak_pair_issues() {
        let a = create_test_profile("a", "Cardiology", "medical_student", "New York");
        let c = create_test_profile("c", "Neurology", "attending_0_5", "Boston");

        let result = explain(&a, &c);

        assert_eq!(
            result.potential_issues,
            vec![
                "Low specialty compatibility",
                "Different career stages",
                "Different cities — meeting in person may be harder",
                "Low overall compatibility",
            ]
        );
        assert!(result.match_reasons.is_empty());
    }

    #[test]
    fn test_shared_institution_reason() {
        let mut a = create_test_profile("a", "Cardiology", "resident", "Boston");
        let mut b = create_test_profile("b", "Neurology", "resident", "Chicago");
        a.institutions = vec![Institution {
            name: "Johns Hopkins Hospital".to_string(),
            city: "Baltimore".to_string(),
            state: "MD".to_string(),
            country: "USA".to_string(),
            kind: "hospital".to_string(),
        }];
        b.institutions = vec![Institution {
            name: "JOHNS HOPKINS HOSPITAL".to_string(),
            city: "Baltimore".to_string(),
            state: "MD".to_string(),
            country: "USA".to_string(),
            kind: "residency".to_string(),
        }];

        let result = explain(&a, &b);

        assert!(result.match_reasons.contains(&"Shared institutional background".to_string()));
    }

    #[test]
    fn test_explanation_is_deterministic() {
        let a = create_test_profile("a", "Oncology", "fellow", "Denver");
        let b = create_test_profile("b", "Hematology", "resident", "Denver");

        let first = explain(&a, &b);
        let second = explain(&a, &b);

        assert_eq!(first.match_reasons, second.match_reasons);
        assert_eq!(first.potential_issues, second.potential_issues);
    }
}
