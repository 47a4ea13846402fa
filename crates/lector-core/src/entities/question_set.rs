use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Comprehension questions generated for one source text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GeneratedQuestionSet {
    pub id: String,
    pub source_text: String,
    /// Between one and five questions, each ending in `?`.
    pub questions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A question set that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestionSet {
    pub source_text: String,
    pub questions: Vec<String>,
}
