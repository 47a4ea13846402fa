//! Comprehension question generation.

use std::sync::{Arc, LazyLock};

use lector_core::entities::{GeneratedQuestionSet, NewQuestionSet};
use lector_core::errors::require_text;
use lector_config::MAX_QUESTIONS;
use lector_core::repository::Repository;
use lector_model::{GenerateRequest, ModelClient, ModelError};
use regex::Regex;

use crate::error::PipelineError;
use crate::prompts;

/// A line that reads as a question: optional `¿`, ends with `?`.
static QUESTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^¿?.*\?$").expect("question pattern should compile"));

/// Leading list markers such as `1.`, `2)`, `-`, `*`, `•`.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+[.)]|[-*•])\s+").expect("list marker pattern should compile")
});

/// Keep the question lines of a raw response, at most `max` of them.
#[must_use]
pub fn extract_questions(raw: &str, max: usize) -> Vec<String> {
    raw.lines()
        .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
        .filter(|line| QUESTION_LINE.is_match(line) && line.chars().any(char::is_alphanumeric))
        .take(max)
        .collect()
}

/// Degraded single question: the first non-empty line, closed with `?`.
#[must_use]
pub fn fallback_question(raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|line| !line.is_empty())?;
    if line.ends_with('?') {
        Some(line.to_string())
    } else {
        Some(format!("{line}?"))
    }
}

/// Turns a source text into a persisted set of comprehension questions.
pub struct QuestionPipeline {
    model: Arc<dyn ModelClient>,
    repository: Arc<dyn Repository>,
    max_questions: usize,
}

impl QuestionPipeline {
    /// `max_questions` is clamped to `1..=MAX_QUESTIONS`.
    #[must_use]
    pub fn new(
        model: Arc<dyn ModelClient>,
        repository: Arc<dyn Repository>,
        max_questions: usize,
    ) -> Self {
        Self {
            model,
            repository,
            max_questions: max_questions.clamp(1, MAX_QUESTIONS),
        }
    }

    /// Generate, post-process and store questions for `source_text`.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::InvalidInput`] for a blank text.
    /// - [`PipelineError::Generation`] when the model call fails or answers
    ///   with nothing but whitespace.
    /// - [`PipelineError::Persistence`] when the set cannot be stored.
    pub async fn generate_questions(
        &self,
        source_text: &str,
    ) -> Result<GeneratedQuestionSet, PipelineError> {
        require_text("text", source_text)?;

        let request =
            GenerateRequest::new(prompts::questions_prompt(source_text, self.max_questions));
        let response = self.model.generate(&request).await?;

        let mut questions = extract_questions(&response.text, self.max_questions);
        if questions.is_empty() {
            let fallback = fallback_question(&response.text).ok_or(ModelError::EmptyResponse)?;
            tracing::warn!(
                model = self.model.model_name(),
                "no question lines in model response; keeping a single fallback question"
            );
            questions.push(fallback);
        }

        let set = self
            .repository
            .save_question_set(NewQuestionSet {
                source_text: source_text.to_string(),
                questions,
            })
            .await?;
        tracing::info!(id = %set.id, count = set.questions.len(), "question set stored");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_only_question_lines() {
        let raw = "Aquí tienes las preguntas:\n\
                   1. ¿Quién escribió el texto?\n\
                   2. ¿Cuál es la idea principal?\n\
                   \n\
                   - ¿Qué ejemplo usa el autor?\n\
                   Espero que te sirvan.";
        assert_eq!(
            extract_questions(raw, 5),
            vec![
                "¿Quién escribió el texto?",
                "¿Cuál es la idea principal?",
                "¿Qué ejemplo usa el autor?",
            ]
        );
    }

    #[test]
    fn caps_at_max() {
        let raw = (1..=8)
            .map(|i| format!("¿Pregunta {i}?"))
            .collect::<Vec<_>>()
            .join("\n");
        let questions = extract_questions(&raw, 5);
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[4], "¿Pregunta 5?");
    }

    #[test]
    fn latin_question_without_inverted_mark_is_kept() {
        assert_eq!(
            extract_questions("What is the main idea?\r\n", 5),
            vec!["What is the main idea?"]
        );
    }

    #[test]
    fn bare_question_marks_are_ignored() {
        assert!(extract_questions("?\n¿?\n  ?  ", 5).is_empty());
    }

    #[test]
    fn fallback_uses_first_non_empty_line() {
        assert_eq!(
            fallback_question("\n\n  Describe la idea central del texto\nOtra línea"),
            Some("Describe la idea central del texto?".to_string())
        );
        assert_eq!(fallback_question(" \n\t"), None);
    }
}
