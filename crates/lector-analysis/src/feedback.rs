//! Free-text answer grading.
//!
//! There is no heuristic fallback for grading: any model or storage failure
//! fails the call, and no feedback is ever fabricated.

use std::sync::{Arc, LazyLock};

use lector_core::entities::{GradedAnswer, NewGradedAnswer};
use lector_core::enums::Correctness;
use lector_core::errors::require_text;
use lector_core::repository::Repository;
use lector_model::{GenerateRequest, ModelClient, ModelError};
use regex::Regex;

use crate::error::PipelineError;
use crate::prompts;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern should compile"));

static STRAY_MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_*`]").expect("markup pattern should compile"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should compile"));

/// Strip markdown emphasis and collapse whitespace.
///
/// Only `*`, `_` and `` ` `` are removed, so the uppercase correctness
/// tokens always survive unchanged.
#[must_use]
pub fn sanitize_feedback(raw: &str) -> String {
    let text = BOLD.replace_all(raw.trim(), "$1");
    let text = STRAY_MARKUP.replace_all(&text, "");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Grades one answer and stores the result.
pub struct FeedbackPipeline {
    model: Arc<dyn ModelClient>,
    repository: Arc<dyn Repository>,
}

impl FeedbackPipeline {
    #[must_use]
    pub fn new(model: Arc<dyn ModelClient>, repository: Arc<dyn Repository>) -> Self {
        Self { model, repository }
    }

    /// Ask the model for a one-sentence verdict on `user_answer`.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::InvalidInput`] when any field is blank.
    /// - [`PipelineError::Generation`] when the model call fails or the
    ///   sanitized feedback is empty.
    /// - [`PipelineError::Persistence`] when the record cannot be stored.
    pub async fn grade_answer(
        &self,
        source_text: &str,
        question: &str,
        user_answer: &str,
    ) -> Result<GradedAnswer, PipelineError> {
        require_text("text", source_text)?;
        require_text("question", question)?;
        require_text("answer", user_answer)?;

        let request =
            GenerateRequest::new(prompts::feedback_prompt(source_text, question, user_answer));
        let response = self.model.generate(&request).await?;

        let feedback_sentence = sanitize_feedback(&response.text);
        if feedback_sentence.is_empty() {
            return Err(ModelError::EmptyResponse.into());
        }
        let category = Correctness::detect(&feedback_sentence);
        if category.is_none() {
            tracing::warn!(
                model = self.model.model_name(),
                "feedback carries no correctness token"
            );
        }

        let graded = self
            .repository
            .save_graded_answer(NewGradedAnswer {
                source_text: source_text.to_string(),
                question: question.to_string(),
                user_answer: user_answer.to_string(),
                feedback_sentence,
                category,
            })
            .await?;
        tracing::info!(id = %graded.id, category = ?graded.category, "answer graded");
        Ok(graded)
    }
}
