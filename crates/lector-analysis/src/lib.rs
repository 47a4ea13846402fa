//! # lector-analysis
//!
//! The analysis pipelines behind Lector:
//! - [`QuestionPipeline`]: comprehension questions for a text (degrades 5 → 1)
//! - [`FeedbackPipeline`]: one-sentence graded feedback for an answer
//! - [`BiasPipeline`]: taxonomy-constrained bias detection with a
//!   deterministic heuristic floor
//!
//! [`Tutor`] wires the three together over an injected [`ModelClient`] and
//! [`Repository`]. Everything except the model call is synchronous and pure.

pub mod biases;
mod error;
pub mod extract;
pub mod feedback;
pub mod heuristic;
pub mod normalize;
mod prompts;
pub mod questions;
pub mod strategy;

pub use biases::BiasPipeline;
pub use error::PipelineError;
pub use feedback::FeedbackPipeline;
pub use heuristic::{HeuristicDetector, HintTable};
pub use questions::QuestionPipeline;

use std::sync::Arc;

use lector_config::LectorConfig;
use lector_core::entities::{BiasFindingSet, GeneratedQuestionSet, GradedAnswer};
use lector_core::errors::require_text;
use lector_core::repository::Repository;
use lector_core::responses::GradingReport;
use lector_model::{GenerateRequest, ModelClient};

/// Knobs the pipelines take from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorSettings {
    pub max_questions: usize,
    pub num_ctx: u32,
}

impl Default for TutorSettings {
    fn default() -> Self {
        Self {
            max_questions: 5,
            num_ctx: 2048,
        }
    }
}

impl From<&LectorConfig> for TutorSettings {
    fn from(config: &LectorConfig) -> Self {
        Self {
            max_questions: config.analysis.max_questions,
            num_ctx: config.model.num_ctx,
        }
    }
}

/// Questions and biases for one text, computed concurrently.
///
/// The two halves fail independently: a question failure does not discard
/// the bias findings.
#[derive(Debug)]
pub struct TextAnalysis {
    pub questions: Result<GeneratedQuestionSet, PipelineError>,
    pub biases: BiasFindingSet,
}

/// Entry point for the three pipeline operations.
pub struct Tutor {
    model: Arc<dyn ModelClient>,
    repository: Arc<dyn Repository>,
    questions: QuestionPipeline,
    feedback: FeedbackPipeline,
    biases: BiasPipeline,
}

impl Tutor {
    #[must_use]
    pub fn new(
        model: Arc<dyn ModelClient>,
        repository: Arc<dyn Repository>,
        detector: Arc<HeuristicDetector>,
        settings: TutorSettings,
    ) -> Self {
        Self {
            questions: QuestionPipeline::new(
                Arc::clone(&model),
                Arc::clone(&repository),
                settings.max_questions,
            ),
            feedback: FeedbackPipeline::new(Arc::clone(&model), Arc::clone(&repository)),
            biases: BiasPipeline::new(Arc::clone(&model), detector, settings.num_ctx),
            model,
            repository,
        }
    }

    /// Build from loaded configuration, including extra heuristic hints.
    #[must_use]
    pub fn from_config(
        model: Arc<dyn ModelClient>,
        repository: Arc<dyn Repository>,
        config: &LectorConfig,
    ) -> Self {
        let detector = Arc::new(HeuristicDetector::with_extra_hints(
            &config.analysis.extra_hints,
        ));
        Self::new(model, repository, detector, TutorSettings::from(config))
    }

    /// See [`QuestionPipeline::generate_questions`].
    ///
    /// # Errors
    ///
    /// Propagates [`PipelineError`] from the question pipeline.
    pub async fn generate_questions(
        &self,
        source_text: &str,
    ) -> Result<GeneratedQuestionSet, PipelineError> {
        self.questions.generate_questions(source_text).await
    }

    /// See [`FeedbackPipeline::grade_answer`].
    ///
    /// # Errors
    ///
    /// Propagates [`PipelineError`] from the feedback pipeline.
    pub async fn grade_answer(
        &self,
        source_text: &str,
        question: &str,
        user_answer: &str,
    ) -> Result<GradedAnswer, PipelineError> {
        self.feedback
            .grade_answer(source_text, question, user_answer)
            .await
    }

    /// See [`BiasPipeline::detect_biases`].
    ///
    /// # Errors
    ///
    /// Only [`PipelineError::InvalidInput`].
    pub async fn detect_biases(&self, source_text: &str) -> Result<BiasFindingSet, PipelineError> {
        self.biases.detect_biases(source_text).await
    }

    /// Run question generation and bias detection side by side.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidInput`] for a blank text; other
    /// question failures are reported inside [`TextAnalysis::questions`].
    pub async fn analyze(&self, source_text: &str) -> Result<TextAnalysis, PipelineError> {
        require_text("text", source_text)?;
        let (questions, biases) = tokio::join!(
            self.questions.generate_questions(source_text),
            self.biases.detect_biases(source_text),
        );
        Ok(TextAnalysis {
            questions,
            biases: biases?,
        })
    }

    /// Send a raw prompt to the model and return its text.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidInput`] for a blank prompt,
    /// [`PipelineError::Generation`] when the call fails.
    pub async fn chat(&self, prompt: &str) -> Result<String, PipelineError> {
        require_text("prompt", prompt)?;
        let response = self.model.generate(&GenerateRequest::new(prompt)).await?;
        Ok(response.text)
    }

    /// Tally stored graded answers by correctness category.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Persistence`] when the answers cannot be read.
    pub async fn grading_report(&self) -> Result<GradingReport, PipelineError> {
        let answers = self.repository.find_graded_answers().await?;
        Ok(GradingReport::from_answers(answers))
    }

    /// Most recent question sets, newest first.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Persistence`] when the sets cannot be read.
    pub async fn list_question_sets(
        &self,
        limit: u32,
    ) -> Result<Vec<GeneratedQuestionSet>, PipelineError> {
        Ok(self.repository.list_question_sets(limit).await?)
    }
}
