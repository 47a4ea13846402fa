//! Ollama `/api/generate` client.

use std::time::Duration;

use async_trait::async_trait;
use lector_config::ModelConfig;
use serde::{Deserialize, Serialize};

use crate::http::{check_response, map_transport_error};
use crate::{GenerateRequest, GenerateResponse, ModelClient, ModelError, ResponseFormat};

#[derive(Debug, Serialize)]
struct GenerateBody<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<ResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerateOptions>,
}

#[derive(Debug, Default, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    num_ctx: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    model: Option<String>,
    response: String,
}

impl<'a> GenerateBody<'a> {
    fn new(model: &'a str, request: &'a GenerateRequest) -> Self {
        let options = (request.temperature.is_some() || request.num_ctx.is_some()).then(|| {
            GenerateOptions {
                temperature: request.temperature,
                num_ctx: request.num_ctx,
            }
        });
        Self {
            model,
            prompt: &request.prompt,
            stream: false,
            format: request.format,
            options,
        }
    }
}

/// HTTP client for an Ollama-compatible server.
pub struct OllamaClient {
    http: reqwest::Client,
    url: String,
    model: String,
    timeout_secs: u64,
}

impl OllamaClient {
    /// Build a client from the `[model]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Client`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ModelError::Client(e.to_string()))?;
        Ok(Self {
            http,
            url: config.generate_url(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl ModelClient for OllamaClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ModelError> {
        let body = GenerateBody::new(&self.model, request);
        tracing::debug!(
            model = %self.model,
            json = request.format.is_some(),
            prompt_chars = request.prompt.chars().count(),
            "sending generate request"
        );

        let resp = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e, self.timeout_secs))?;
        let resp = check_response(resp).await?;

        let reply: GenerateReply = resp
            .json()
            .await
            .map_err(|e| map_transport_error(&e, self.timeout_secs))?;

        Ok(GenerateResponse {
            text: reply.response,
            model: reply.model,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
