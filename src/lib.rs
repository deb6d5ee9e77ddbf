//! Huddle Algo - compatibility scoring and group formation for the Huddle physician network
//!
//! Scores pairs of physician profiles across specialty, career stage,
//! location, institution and demographics, explains the result, and
//! assembles eligible profiles into small groups for the weekly matching run.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Matcher, GroupingOptions, Taxonomy, calculate_compatibility, analyze_match};
pub use crate::error::MatchingError;
pub use crate::models::{Profile, Institution, SpecialtyPreference, CompatibilityScore, MatchingResult, Group, WeeklyMatchRun};
