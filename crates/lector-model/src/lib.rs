//! # lector-model
//!
//! The text-generation seam used by every Lector pipeline.
//!
//! [`ModelClient`] is the single external dependency of the analysis core:
//! one prompt in, one raw text out, always fallible. [`OllamaClient`] speaks
//! the Ollama `/api/generate` protocol over HTTP.
//!
//! Retries are not attempted here; each call is one request.

mod error;
mod http;
mod ollama;

pub use error::ModelError;
pub use ollama::OllamaClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Structured output mode requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    Json,
}

/// One generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub format: Option<ResponseFormat>,
    pub temperature: Option<f32>,
    /// Context window size, when the service supports it.
    pub num_ctx: Option<u32>,
}

impl GenerateRequest {
    /// Plain request with service-default sampling.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: None,
            temperature: None,
            num_ctx: None,
        }
    }

    /// Ask for JSON-only output.
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.format = Some(ResponseFormat::Json);
        self
    }

    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub const fn num_ctx(mut self, num_ctx: u32) -> Self {
        self.num_ctx = Some(num_ctx);
        self
    }
}

/// Raw text returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub text: String,
    /// Model that served the request, when reported.
    pub model: Option<String>,
}

impl GenerateResponse {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
        }
    }
}

/// Abstract "prompt in, text out" call to a text-generation service.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Run one generation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the service is unreachable, times out,
    /// answers with an error status or an undecodable envelope.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ModelError>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_strict_options() {
        let req = GenerateRequest::new("hola").json().temperature(0.0).num_ctx(2048);
        assert_eq!(req.prompt, "hola");
        assert_eq!(req.format, Some(ResponseFormat::Json));
        assert_eq!(req.temperature, Some(0.0));
        assert_eq!(req.num_ctx, Some(2048));
    }

    #[test]
    fn plain_request_has_no_options() {
        let req = GenerateRequest::new("hola");
        assert!(req.format.is_none());
        assert!(req.temperature.is_none());
        assert!(req.num_ctx.is_none());
    }
}
