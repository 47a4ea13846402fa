//! Text-generation service configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    String::from("http://127.0.0.1:11434")
}

fn default_model() -> String {
    String::from("llama3:8b")
}

const fn default_timeout_secs() -> u64 {
    120
}

const fn default_num_ctx() -> u32 {
    2048
}

fn default_user_agent() -> String {
    String::from("lector/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Base URL of the Ollama-compatible server.
    #[serde(default = "default_host")]
    pub host: String,

    /// Model tag passed on every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout. Covers connect and full response.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Context window requested for the strict JSON bias stage.
    #[serde(default = "default_num_ctx")]
    pub num_ctx: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            num_ctx: default_num_ctx(),
            user_agent: default_user_agent(),
        }
    }
}

impl ModelConfig {
    /// Host and model are both set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty() && !self.model.trim().is_empty()
    }

    /// Endpoint for non-streaming generation.
    ///
    /// A host without a scheme (`127.0.0.1:11434`, as `OLLAMA_HOST` is often
    /// written) is taken as plain `http`.
    #[must_use]
    pub fn generate_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.contains("://") {
            format!("{host}/api/generate")
        } else {
            format!("http://{host}/api/generate")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_ollama() {
        let config = ModelConfig::default();
        assert!(config.is_configured());
        assert_eq!(config.model, "llama3:8b");
        assert_eq!(config.timeout_secs, 120);
        assert_eq!(config.num_ctx, 2048);
        assert_eq!(config.generate_url(), "http://127.0.0.1:11434/api/generate");
    }

    #[test]
    fn generate_url_tolerates_trailing_slash() {
        let config = ModelConfig {
            host: "http://gpu-box:11434/".into(),
            ..Default::default()
        };
        assert_eq!(config.generate_url(), "http://gpu-box:11434/api/generate");
    }

    #[test]
    fn generate_url_defaults_to_http_scheme() {
        let config = ModelConfig {
            host: "0.0.0.0:11434".into(),
            ..Default::default()
        };
        assert_eq!(config.generate_url(), "http://0.0.0.0:11434/api/generate");

        let config = ModelConfig {
            host: "https://ollama.internal".into(),
            ..Default::default()
        };
        assert_eq!(config.generate_url(), "https://ollama.internal/api/generate");
    }

    #[test]
    fn blank_model_is_not_configured() {
        let config = ModelConfig {
            model: "  ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
