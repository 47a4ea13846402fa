use std::sync::Arc;

use anyhow::Context;
use lector_analysis::Tutor;
use lector_config::LectorConfig;
use lector_db::LectorDb;
use lector_model::OllamaClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub tutor: Tutor,
}

impl AppContext {
    /// Open storage, build the model client and wire the pipelines.
    pub async fn init(config: LectorConfig) -> anyhow::Result<Self> {
        let db = LectorDb::open(&config.storage).await.with_context(|| {
            format!("failed to open database at {}", config.storage.db_path)
        })?;
        let model = OllamaClient::new(&config.model).context("failed to build model client")?;

        tracing::debug!(
            host = %config.model.host,
            model = %config.model.model,
            db = %config.storage.db_path,
            "application context ready"
        );

        let tutor = Tutor::from_config(Arc::new(model), Arc::new(db), &config);
        Ok(Self { tutor })
    }
}
