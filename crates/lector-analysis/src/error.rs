//! Pipeline error types.

use lector_core::errors::CoreError;
use lector_core::repository::RepositoryError;
use lector_model::ModelError;
use thiserror::Error;

/// Errors from the question, feedback and chat pipelines.
///
/// The bias pipeline only ever returns [`PipelineError::InvalidInput`]; model
/// failures are absorbed by its fallback chain.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required field was missing or blank. Not retryable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The text-generation call failed.
    #[error("generation failed: {0}")]
    Generation(#[from] ModelError),

    /// The record could not be stored or read back.
    #[error("persistence failed: {0}")]
    Persistence(#[from] RepositoryError),
}

impl From<CoreError> for PipelineError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) | CoreError::Validation(message) => {
                Self::InvalidInput(message)
            }
            CoreError::Other(other) => Self::InvalidInput(other.to_string()),
        }
    }
}

impl PipelineError {
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
