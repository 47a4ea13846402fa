//! Analysis pipeline tuning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Most comprehension questions a single generation may keep.
pub const MAX_QUESTIONS: usize = 5;

const fn default_max_questions() -> usize {
    MAX_QUESTIONS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Upper bound on questions kept from one generation, `1..=MAX_QUESTIONS`.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,

    /// Extra heuristic trigger phrases keyed by canonical label name.
    ///
    /// Appended after the built-in hints. Keys that do not name a canonical
    /// label are ignored when the hint table is built.
    #[serde(default)]
    pub extra_hints: BTreeMap<String, Vec<String>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            extra_hints: BTreeMap::new(),
        }
    }
}
