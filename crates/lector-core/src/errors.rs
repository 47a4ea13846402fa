//! Cross-cutting error types for Lector.
//!
//! Domain-specific errors (`ModelError`, `DatabaseError`, `PipelineError`) are
//! defined in their respective crates. The CLI converges everything on
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Lector crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required input field was missing or blank.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reject a blank (empty after trim) required field.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] naming `field` when `value` is blank.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput(format!("missing {field}")));
    }
    Ok(value)
}
