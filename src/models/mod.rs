// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Profile, Institution, SpecialtyPreference, CompatibilityScore, ScoreBreakdown,
    MatchingResult, Group, GroupFormation, WeeklyMatchRun, ScoringWeights, DIMENSION_WEIGHTS,
};
pub use requests::{PairRequest, FindMatchesRequest, WeeklyGroupsRequest};
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
