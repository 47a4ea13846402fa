//! Record types produced by the analysis pipelines.
//!
//! All records are created once per request and never edited afterwards.

mod bias_findings;
mod graded_answer;
mod question_set;

pub use bias_findings::{BiasFindingSet, LabelFinding};
pub use graded_answer::{GradedAnswer, NewGradedAnswer};
pub use question_set::{GeneratedQuestionSet, NewQuestionSet};
