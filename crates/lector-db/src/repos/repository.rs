use async_trait::async_trait;

use lector_core::entities::{GeneratedQuestionSet, GradedAnswer, NewGradedAnswer, NewQuestionSet};
use lector_core::repository::{Repository, RepositoryError};

use crate::LectorDb;

#[async_trait]
impl Repository for LectorDb {
    async fn save_question_set(
        &self,
        set: NewQuestionSet,
    ) -> Result<GeneratedQuestionSet, RepositoryError> {
        Ok(self.insert_question_set(set).await?)
    }

    async fn save_graded_answer(
        &self,
        answer: NewGradedAnswer,
    ) -> Result<GradedAnswer, RepositoryError> {
        Ok(self.insert_graded_answer(answer).await?)
    }

    async fn find_graded_answers(&self) -> Result<Vec<GradedAnswer>, RepositoryError> {
        Ok(self.list_graded_answers().await?)
    }

    async fn list_question_sets(
        &self,
        limit: u32,
    ) -> Result<Vec<GeneratedQuestionSet>, RepositoryError> {
        Ok(self.recent_question_sets(limit).await?)
    }
}
