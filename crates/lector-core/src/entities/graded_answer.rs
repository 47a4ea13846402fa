use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Correctness;

/// A free-text answer together with the feedback it received.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GradedAnswer {
    pub id: String,
    pub source_text: String,
    pub question: String,
    pub user_answer: String,
    /// Short sentence that embeds `CORRECTA`, `PARCIAL` or `INCORRECTA`.
    pub feedback_sentence: String,
    /// Category read from `feedback_sentence` at grading time. `None` when the
    /// model omitted the token.
    pub category: Option<Correctness>,
    pub created_at: DateTime<Utc>,
}

/// A graded answer that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGradedAnswer {
    pub source_text: String,
    pub question: String,
    pub user_answer: String,
    pub feedback_sentence: String,
    pub category: Option<Correctness>,
}
