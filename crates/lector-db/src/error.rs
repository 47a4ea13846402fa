//! Database error types for lector-db.

use lector_core::repository::RepositoryError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Stored data could not be mapped back into a record.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The database file or its directory could not be prepared.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<DatabaseError> for RepositoryError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::InvalidState(message) => Self::Corrupt(message),
            other => Self::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_maps_to_corrupt() {
        let err: RepositoryError = DatabaseError::InvalidState("bad json".into()).into();
        assert!(matches!(err, RepositoryError::Corrupt(ref m) if m == "bad json"));
    }

    #[test]
    fn other_errors_map_to_backend() {
        let err: RepositoryError = DatabaseError::NoResult.into();
        assert!(matches!(err, RepositoryError::Backend(ref m) if m == "No result returned"));
    }
}
