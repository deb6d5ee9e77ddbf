use std::collections::HashMap;

/// Fallback bucket for labels missing from the category partition
pub const OTHER_CATEGORY: &str = "Other";

/// Career-stage weight used when a stage or stage pair is not listed
pub const DEFAULT_CAREER_WEIGHT: f64 = 0.1;

/// Specialties considered adjacent; lookups check both directions
const RELATED_SPECIALTIES: &[(&str, &[&str])] = &[
    ("Cardiology", &["Cardiothoracic Surgery", "Internal Medicine", "Vascular Surgery", "Pulmonology"]),
    ("Neurology", &["Neurosurgery", "Psychiatry", "Physical Medicine & Rehabilitation"]),
    ("Oncology", &["Hematology", "Radiology", "Pathology"]),
    ("Emergency Medicine", &["Critical Care", "Anesthesiology", "Family Medicine"]),
    ("Family Medicine", &["Internal Medicine", "Geriatrics"]),
    ("Pediatrics", &["Family Medicine"]),
    ("Obstetrics & Gynecology", &["Family Medicine"]),
    ("Gastroenterology", &["General Surgery"]),
    ("Orthopedic Surgery", &["Physical Medicine & Rehabilitation"]),
    ("Pulmonology", &["Critical Care"]),
    ("Radiology", &["Nuclear Medicine"]),
];

const SPECIALTY_CATEGORIES: &[(&str, &[&str])] = &[
    ("Internal Medicine", &[
        "Internal Medicine", "Cardiology", "Gastroenterology", "Pulmonology", "Nephrology",
        "Endocrinology", "Rheumatology", "Hematology", "Oncology", "Infectious Disease",
        "Geriatrics",
    ]),
    ("Surgery", &[
        "General Surgery", "Orthopedic Surgery", "Cardiothoracic Surgery", "Neurosurgery",
        "Plastic Surgery", "Vascular Surgery", "Urology", "Otolaryngology", "Ophthalmology",
    ]),
    ("Neurosciences", &["Neurology", "Psychiatry", "Physical Medicine & Rehabilitation"]),
    ("Primary Care", &["Family Medicine", "Pediatrics", "Obstetrics & Gynecology"]),
    ("Acute Care", &["Emergency Medicine", "Anesthesiology", "Critical Care"]),
    ("Diagnostics", &["Radiology", "Pathology", "Nuclear Medicine"]),
];

/// Row-major stage weights. Rows are not mirrored: the medical student row
/// has no `attending_5_plus` column.
const CAREER_STAGE_WEIGHTS: &[(&str, &[(&str, f64)])] = &[
    ("medical_student", &[
        ("medical_student", 1.0),
        ("resident", 0.7),
        ("fellow", 0.5),
        ("attending_0_5", 0.3),
    ]),
    ("resident", &[
        ("medical_student", 0.7),
        ("resident", 1.0),
        ("fellow", 0.8),
        ("attending_0_5", 0.6),
        ("attending_5_plus", 0.4),
    ]),
    ("fellow", &[
        ("medical_student", 0.5),
        ("resident", 0.8),
        ("fellow", 1.0),
        ("attending_0_5", 0.8),
        ("attending_5_plus", 0.6),
    ]),
    ("attending_0_5", &[
        ("medical_student", 0.3),
        ("resident", 0.6),
        ("fellow", 0.8),
        ("attending_0_5", 1.0),
        ("attending_5_plus", 0.8),
    ]),
    ("attending_5_plus", &[
        ("medical_student", 0.2),
        ("resident", 0.4),
        ("fellow", 0.6),
        ("attending_0_5", 0.8),
        ("attending_5_plus", 1.0),
    ]),
];

/// Read-only lookup tables shared by the dimension scorers
///
/// Built once and handed to scorers by reference, so scoring never touches
/// process-wide state.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    related: HashMap<&'static str, &'static [&'static str]>,
    categories: HashMap<&'static str, &'static str>,
    career_weights: HashMap<&'static str, HashMap<&'static str, f64>>,
}

impl Taxonomy {
    /// Tables shipped with the service
    pub fn standard() -> Self {
        let related = RELATED_SPECIALTIES.iter().copied().collect();

        let categories = SPECIALTY_CATEGORIES
            .iter()
            .flat_map(|(category, members)| members.iter().map(move |m| (*m, *category)))
            .collect();

        let career_weights = CAREER_STAGE_WEIGHTS
            .iter()
            .map(|(row, columns)| (*row, columns.iter().copied().collect()))
            .collect();

        Self {
            related,
            categories,
            career_weights,
        }
    }

    /// Whether either specialty lists the other as related
    pub fn is_related(&self, a: &str, b: &str) -> bool {
        let lists = |from: &str, to: &str| {
            self.related
                .get(from)
                .is_some_and(|related| related.iter().any(|r| *r == to))
        };
        lists(a, b) || lists(b, a)
    }

    /// Broader bucket for a specialty, `"Other"` when unknown
    pub fn category_of(&self, specialty: &str) -> &'static str {
        self.categories
            .get(specialty)
            .copied()
            .unwrap_or(OTHER_CATEGORY)
    }

    /// Weight looked up in `from`'s row
    pub fn career_weight(&self, from: &str, to: &str) -> f64 {
        self.career_weights
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(DEFAULT_CAREER_WEIGHT)
    }

    pub fn career_stages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.career_weights.keys().copied()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_either_direction() {
        let taxonomy = Taxonomy::standard();

        assert!(taxonomy.is_related("Cardiology", "Pulmonology"));
        assert!(taxonomy.is_related("Pulmonology", "Cardiology"));
        assert!(!taxonomy.is_related("Cardiology", "Neurology"));
    }

    #[test]
    fn test_unknown_specialty_falls_back_to_other() {
        let taxonomy = Taxonomy::standard();

        assert_eq!(taxonomy.category_of("Cardiology"), "Internal Medicine");
        assert_eq!(taxonomy.category_of("Space Medicine"), OTHER_CATEGORY);
    }

    #[test]
    fn test_categories_are_a_partition() {
        let mut seen = std::collections::HashSet::new();
        for (_, members) in SPECIALTY_CATEGORIES {
            for member in *members {
                assert!(seen.insert(*member), "{} listed in two categories", member);
            }
        }
    }

    #[test]
    fn test_career_weight_is_row_major() {
        let taxonomy = Taxonomy::standard();

        assert_eq!(taxonomy.career_weight("attending_5_plus", "medical_student"), 0.2);
        assert_eq!(taxonomy.career_weight("medical_student", "attending_5_plus"), DEFAULT_CAREER_WEIGHT);
    }

    #[test]
    fn test_unlisted_stage_defaults() {
        let taxonomy = Taxonomy::standard();

        assert_eq!(taxonomy.career_weight("retired", "resident"), DEFAULT_CAREER_WEIGHT);
        assert_eq!(taxonomy.career_weight("resident", "retired"), DEFAULT_CAREER_WEIGHT);
        assert_eq!(taxonomy.career_stages().count(), 5);
    }
}
