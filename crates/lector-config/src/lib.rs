//! # lector-config
//!
//! Layered configuration loading for Lector using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LECTOR_*` prefix, `__` as separator)
//! 2. Project-level `.lector/config.toml`
//! 3. User-level `~/.config/lector/config.toml`
//! 4. `OLLAMA_HOST` / `OLLAMA_MODEL`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LECTOR_MODEL__HOST` -> `model.host`, `LECTOR_STORAGE__DB_PATH`
//! -> `storage.db_path`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lector_config::LectorConfig;
//!
//! let config = LectorConfig::load_with_dotenv().expect("config");
//! println!("model: {} at {}", config.model.model, config.model.host);
//! ```

mod analysis;
mod error;
mod model;
mod storage;

pub use analysis::{AnalysisConfig, MAX_QUESTIONS};
pub use error::ConfigError;
pub use model::ModelConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LectorConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl LectorConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: the variables the Ollama CLI itself understands
        figment = figment.merge(Env::raw().filter_map(|key| {
            if key.as_str().eq_ignore_ascii_case("OLLAMA_HOST") {
                Some("model.host".into())
            } else if key.as_str().eq_ignore_ascii_case("OLLAMA_MODEL") {
                Some("model.model".into())
            } else {
                None
            }
        }));

        // Layer 2: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 3: Project-local config
        let local_path = PathBuf::from(".lector/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("LECTOR_").split("__"));

        figment
    }

    /// Reject values the pipelines cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] for a blank model host/name and
    /// [`ConfigError::InvalidValue`] for a zero timeout or a question count
    /// outside `1..=MAX_QUESTIONS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.model.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "model".into(),
            });
        }
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "model.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.analysis.max_questions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_questions".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.analysis.max_questions > MAX_QUESTIONS {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_questions".into(),
                reason: format!("must be at most {MAX_QUESTIONS}"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lector").join("config.toml"))
    }
}
