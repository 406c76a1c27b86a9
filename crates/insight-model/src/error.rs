//! Error types for the profiling data model.

use thiserror::Error;

/// Errors raised when building a dataset from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The dataset is missing, not a sequence of rows, or empty.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl ModelError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
