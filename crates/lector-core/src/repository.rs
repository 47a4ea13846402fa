//! Persistence seam consumed by the analysis pipelines.
//!
//! The pipelines only ever create records and read them back for reporting.
//! `lector-db` provides the libSQL implementation; tests use in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{GeneratedQuestionSet, GradedAnswer, NewGradedAnswer, NewQuestionSet};

/// Errors surfaced by a [`Repository`] implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored row could not be mapped back into a record.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Store for generated questions and graded answers.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Persist a question set and return it with its assigned id and timestamp.
    async fn save_question_set(
        &self,
        set: NewQuestionSet,
    ) -> Result<GeneratedQuestionSet, RepositoryError>;

    /// Persist a graded answer and return it with its assigned id and timestamp.
    async fn save_graded_answer(
        &self,
        answer: NewGradedAnswer,
    ) -> Result<GradedAnswer, RepositoryError>;

    /// All graded answers, oldest first.
    async fn find_graded_answers(&self) -> Result<Vec<GradedAnswer>, RepositoryError>;

    /// Most recent question sets, newest first.
    async fn list_question_sets(
        &self,
        limit: u32,
    ) -> Result<Vec<GeneratedQuestionSet>, RepositoryError>;
}
