// Core algorithm exports
pub mod dimensions;
pub mod explain;
pub mod grouping;
pub mod matcher;
pub mod preference;
pub mod scoring;
pub mod taxonomy;

pub use dimensions::{specialty_score, career_score, location_score, institution_score, demographics_score};
pub use explain::analyze_match;
pub use grouping::{form_groups, GroupingOptions, DEFAULT_GROUP_CAPACITY};
pub use matcher::{Matcher, MatchResult};
pub use preference::{apply_preference_weighting, preference_multiplier};
pub use scoring::{calculate_compatibility, calculate_breakdown};
pub use taxonomy::Taxonomy;
