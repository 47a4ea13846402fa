//! Grading categories, label provenance and bias verdicts.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Correctness
// ---------------------------------------------------------------------------

/// Grading outcome of a free-text answer.
///
/// The feedback sentence carries the outcome as an uppercase token
/// (`CORRECTA`, `PARCIAL`, `INCORRECTA`); this enum is the structured form
/// derived from that token once, at grading time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    Correct,
    Partial,
    Incorrect,
}

impl Correctness {
    /// Uppercase token embedded in feedback sentences.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Correct => "CORRECTA",
            Self::Partial => "PARCIAL",
            Self::Incorrect => "INCORRECTA",
        }
    }

    /// Detect the category token in a feedback sentence.
    ///
    /// `INCORRECTA` contains `CORRECTA`, so it is checked first.
    #[must_use]
    pub fn detect(sentence: &str) -> Option<Self> {
        [Self::Incorrect, Self::Partial, Self::Correct]
            .into_iter()
            .find(|category| sentence.contains(category.token()))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Partial => "partial",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LabelOrigin
// ---------------------------------------------------------------------------

/// Which detection branch confirmed a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LabelOrigin {
    Model,
    Heuristic,
    Both,
}

impl LabelOrigin {
    /// Combine two confirmations of the same label.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Model, Self::Model) => Self::Model,
            (Self::Heuristic, Self::Heuristic) => Self::Heuristic,
            _ => Self::Both,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Heuristic => "heuristic",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for LabelOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BiasVerdict
// ---------------------------------------------------------------------------

/// Explicit outcome of a bias analysis that completed.
///
/// `NoFindings` is a successful, empty analysis. It is never used to
/// report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BiasVerdict {
    Detected,
    NoFindings,
}

impl BiasVerdict {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detected => "detected",
            Self::NoFindings => "no_findings",
        }
    }
}

impl fmt::Display for BiasVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Tu respuesta es CORRECTA, bien hecho.", Some(Correctness::Correct))]
    #[case("Tu respuesta es INCORRECTA: revisa el segundo párrafo.", Some(Correctness::Incorrect))]
    #[case("Es PARCIAL, te faltó mencionar la causa.", Some(Correctness::Partial))]
    #[case("Tu respuesta es correcta.", None)]
    #[case("", None)]
    fn detect_reads_uppercase_token(#[case] sentence: &str, #[case] expected: Option<Correctness>) {
        assert_eq!(Correctness::detect(sentence), expected);
    }

    #[test]
    fn origin_merge_is_symmetric() {
        use LabelOrigin::{Both, Heuristic, Model};
        assert_eq!(Model.merge(Heuristic), Both);
        assert_eq!(Heuristic.merge(Model), Both);
        assert_eq!(Model.merge(Model), Model);
        assert_eq!(Heuristic.merge(Heuristic), Heuristic);
        assert_eq!(Both.merge(Model), Both);
    }

    #[test]
    fn verdict_serializes_snake_case() {
        let json = serde_json::to_string(&BiasVerdict::NoFindings).unwrap();
        assert_eq!(json, "\"no_findings\"");
    }
}
