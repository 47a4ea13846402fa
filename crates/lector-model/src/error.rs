//! Model client error types.

use thiserror::Error;

/// Errors from a text-generation call.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The service could not be reached (connection refused, DNS, reset).
    #[error("model service unavailable: {0}")]
    Unavailable(String),

    /// The service did not answer within the configured timeout.
    #[error("model call timed out after {secs}s")]
    Timeout {
        /// Configured timeout in seconds.
        secs: u64,
    },

    /// The service answered with a non-success status code.
    #[error("model API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response envelope could not be decoded.
    #[error("unreadable model response: {0}")]
    Parse(String),

    /// The service answered with no usable text.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The HTTP client or the request itself could not be built.
    #[error("model client setup failed: {0}")]
    Client(String),
}

impl ModelError {
    /// Transient failures a caller may retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout { .. })
            || matches!(self, Self::Api { status, .. } if *status >= 500 || *status == 429)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(ModelError::Timeout { secs: 5 }.is_transient());
        assert!(ModelError::Unavailable("refused".into()).is_transient());
        assert!(
            ModelError::Api {
                status: 503,
                message: String::new()
            }
            .is_transient()
        );
        assert!(
            !ModelError::Api {
                status: 404,
                message: "model not found".into()
            }
            .is_transient()
        );
        assert!(!ModelError::EmptyResponse.is_transient());
    }
}
