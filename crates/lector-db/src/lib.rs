//! # lector-db
//!
//! libSQL storage for Lector.
//!
//! Holds the two append-only record kinds the pipelines produce: generated
//! question sets and graded answers. [`LectorDb`] implements
//! [`lector_core::repository::Repository`], so the analysis crate never sees
//! SQL.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use std::path::Path;

use error::DatabaseError;
use lector_config::StorageConfig;
use libsql::Builder;

/// ID prefix for stored question sets.
pub const PREFIX_QUESTION_SET: &str = "qst";

/// ID prefix for stored graded answers.
pub const PREFIX_GRADED_ANSWER: &str = "ans";

/// Central database handle.
pub struct LectorDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LectorDb {
    /// Open a local database at the given path, or `:memory:`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let lector_db = Self { db, conn };
        lector_db.run_migrations().await?;
        tracing::debug!(path, "database ready");
        Ok(lector_db)
    }

    /// Open the database named by configuration, creating its parent
    /// directory when needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Io` if the directory cannot be created, or any
    /// error from [`LectorDb::open_local`].
    pub async fn open(config: &StorageConfig) -> Result<Self, DatabaseError> {
        if !config.is_in_memory()
            && let Some(parent) = Path::new(&config.db_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Self::open_local(&config.db_path).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"qst-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
