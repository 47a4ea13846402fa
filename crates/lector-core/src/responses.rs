//! Response types assembled from stored records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::GradedAnswer;
use crate::enums::Correctness;

/// How many recent answers a [`GradingReport`] carries.
pub const RECENT_ANSWERS: usize = 5;

/// Tally of graded answers by correctness category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GradingReport {
    pub total: usize,
    pub correct: usize,
    pub partial: usize,
    pub incorrect: usize,
    /// Answers whose feedback carried no category token.
    pub unclassified: usize,
    /// Latest answers, oldest first.
    pub recent: Vec<GradedAnswer>,
}

impl GradingReport {
    /// Build a report from answers ordered oldest first.
    ///
    /// Records stored without a structured category are classified from
    /// their feedback sentence.
    #[must_use]
    pub fn from_answers(answers: Vec<GradedAnswer>) -> Self {
        let mut report = Self {
            total: answers.len(),
            ..Self::default()
        };
        for answer in &answers {
            let category = answer
                .category
                .or_else(|| Correctness::detect(&answer.feedback_sentence));
            match category {
                Some(Correctness::Correct) => report.correct += 1,
                Some(Correctness::Partial) => report.partial += 1,
                Some(Correctness::Incorrect) => report.incorrect += 1,
                None => report.unclassified += 1,
            }
        }
        let skip = answers.len().saturating_sub(RECENT_ANSWERS);
        report.recent = answers.into_iter().skip(skip).collect();
        report
    }
}
