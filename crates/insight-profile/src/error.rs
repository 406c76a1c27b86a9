//! Error types for profiling.

use insight_model::ModelError;
use thiserror::Error;

/// Errors returned by the profiler.
///
/// Irregular cell values never produce errors; only unusable top-level input
/// does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The dataset is null, not an array of rows, or empty.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<ModelError> for ProfileError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidInput { reason } => Self::InvalidInput { reason },
        }
    }
}

/// Result type for profiling operations.
pub type Result<T> = std::result::Result<T, ProfileError>;
