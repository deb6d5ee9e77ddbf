use thiserror::Error;

/// Caller contract violations; everything else resolves to a default score
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchingError {
    #[error("Profile is missing an identifier")]
    MissingProfileId,

    #[error("Profile {0} appears more than once in the pool")]
    DuplicateProfileId(String),

    #[error("Group capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("Minimum group score must be within 0.0..=1.0, got {0}")]
    InvalidMinScore(f64),

    #[error("Candidate pool of {size} profiles exceeds the limit of {max}")]
    PoolTooLarge { size: usize, max: usize },
}
