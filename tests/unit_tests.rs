// Unit tests for Huddle Algo

use huddle_algo::core::{
    dimensions::{specialty_score, location_score, institution_score, career_score},
    preference::apply_preference_weighting,
    scoring::calculate_compatibility,
    taxonomy::Taxonomy,
};
use huddle_algo::models::{Profile, Institution, SpecialtyPreference};

fn specs(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn create_test_profile(id: &str, specialties: &[&str], stage: &str, city: &str) -> Profile {
    Profile {
        id: id.to_string(),
        specialties: specs(specialties),
        career_stage: stage.to_string(),
        specialty_preference: SpecialtyPreference::NoPreference,
        institutions: vec![],
        city: city.to_string(),
        gender: "female".to_string(),
        gender_preference: "no_preference".to_string(),
        age: Some(36),
    }
}

#[test]
fn test_exact_specialty_match_before_weighting() {
    let taxonomy = Taxonomy::standard();
    let score = specialty_score(&specs(&["Dermatology"]), &specs(&["Dermatology"]), &taxonomy);
    assert_eq!(score, 1.0);
}

#[test]
fn test_same_city_exact_one_and_different_exact_point_three() {
    assert_eq!(location_score("Chicago", "CHICAGO"), 1.0);
    assert_eq!(location_score("Chicago", "Houston"), 0.3);
}

#[test]
fn test_empty_input_policies_differ() {
    let taxonomy = Taxonomy::standard();
    let mayo = Institution {
        name: "Mayo Clinic".to_string(),
        city: "Rochester".to_string(),
        state: "MN".to_string(),
        country: "USA".to_string(),
        kind: "hospital".to_string(),
    };

    assert_eq!(specialty_score(&[], &specs(&["Cardiology"]), &taxonomy), 0.0);
    assert_eq!(institution_score(&[], &[mayo]), 0.5);
}

#[test]
fn test_zero_specialties_scores_zero_through_aggregator() {
    let taxonomy = Taxonomy::standard();
    let a = create_test_profile("a", &[], "resident", "Boston");
    let b = create_test_profile("b", &["Cardiology"], "resident", "Boston");

    let score = calculate_compatibility(&a, &b, &taxonomy);

    assert_eq!(score.specialty, 0.0);
    assert!(score.overall > 0.0);
}

#[test]
fn test_same_preference_sharing_is_boosted() {
    let cardio = specs(&["Cardiology", "Nephrology"]);
    let other = specs(&["Cardiology", "Neurology"]);
    let taxonomy = Taxonomy::standard();

    let raw = specialty_score(&cardio, &other, &taxonomy);
    let weighted = apply_preference_weighting(
        raw,
        SpecialtyPreference::Same,
        SpecialtyPreference::Same,
        &cardio,
        &other,
    );

    assert!(weighted >= raw, "weighted {} should not be below raw {}", weighted, raw);
}

#[test]
fn test_same_preference_without_sharing_is_penalised() {
    let cardio = specs(&["Cardiology"]);
    let neuro = specs(&["Neurology"]);
    let taxonomy = Taxonomy::standard();

    let raw = specialty_score(&cardio, &neuro, &taxonomy);
    let weighted = apply_preference_weighting(
        raw,
        SpecialtyPreference::Same,
        SpecialtyPreference::Same,
        &cardio,
        &neuro,
    );

    assert!(weighted < raw);
}

#[test]
fn test_career_table_lookup_is_directional() {
    let taxonomy = Taxonomy::standard();
    assert_eq!(career_score("medical_student", "attending_5_plus", &taxonomy), 0.1);
    assert_eq!(career_score("attending_5_plus", "medical_student", &taxonomy), 0.2);
    assert_eq!(career_score("chief_resident", "chief_resident", &taxonomy), 0.1);
}

#[test]
fn test_same_city_cardiologists_example() {
    let taxonomy = Taxonomy::standard();
    let a = create_test_profile("A", &["Cardiology"], "attending_5_plus", "New York");
    let b = create_test_profile("B", &["Cardiology"], "attending_0_5", "New York");

    let score = calculate_compatibility(&a, &b, &taxonomy);

    assert_eq!(score.specialty, 1.0);
    assert_eq!(score.location, 1.0);
    assert!(score.overall > 0.8, "overall was {}", score.overall);
}

#[test]
fn test_unrelated_pair_example() {
    let taxonomy = Taxonomy::standard();
    let a = create_test_profile("A", &["Cardiology"], "attending_5_plus", "New York");
    let c = create_test_profile("C", &["Neurology"], "attending_5_plus", "Boston");

    let score = calculate_compatibility(&a, &c, &taxonomy);

    assert!((score.specialty - 0.1).abs() < 1e-9);
    assert_eq!(score.location, 0.3);
}
