//! Shared HTTP response helpers for the model client.
//!
//! Centralizes status-code checks and transport-error mapping so the client
//! module stays focused on request construction and response mapping.

use crate::error::ModelError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise yields
/// [`ModelError::Api`] with the status code and the `error` field of an
/// Ollama error body (falling back to the raw body).
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ModelError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ModelError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Extract `{"error": "..."}` from an error body, or return the body trimmed.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Map a transport error onto the model error taxonomy.
pub fn map_transport_error(error: &reqwest::Error, timeout_secs: u64) -> ModelError {
    if error.is_timeout() {
        ModelError::Timeout { secs: timeout_secs }
    } else if error.is_builder() {
        ModelError::Client(error.to_string())
    } else if error.is_decode() {
        ModelError::Parse(error.to_string())
    } else {
        ModelError::Unavailable(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, r#"{"response":"ok"}"#);
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_reads_ollama_error_field() {
        let resp = mock_response(404, r#"{"error":"model 'llama9' not found"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ModelError::Api { status: 404, ref message } if message == "model 'llama9' not found"
        ));
    }

    #[tokio::test]
    async fn check_response_falls_back_to_raw_body() {
        let resp = mock_response(502, "  bad gateway \n");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ModelError::Api { status: 502, ref message } if message == "bad gateway"
        ));
    }

    #[test]
    fn malformed_url_is_a_client_error() {
        let error = reqwest::Client::new()
            .get("127.0.0.1:11434/api/generate")
            .build()
            .unwrap_err();
        let mapped = map_transport_error(&error, 120);
        assert!(matches!(mapped, ModelError::Client(_)), "got {mapped:?}");
        assert!(!mapped.is_transient());
    }
}
