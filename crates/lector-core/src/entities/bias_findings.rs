use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BiasVerdict, LabelOrigin};
use crate::taxonomy::CanonicalLabel;

/// Provenance of one detected label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabelFinding {
    pub label: CanonicalLabel,
    pub origin: LabelOrigin,
}

/// Result of a bias analysis. Returned to the caller, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BiasFindingSet {
    pub source_text: String,
    /// Deduplicated labels in taxonomy order.
    pub labels: Vec<CanonicalLabel>,
    /// One entry per label in `labels`, same order.
    pub origins: Vec<LabelFinding>,
    /// Name of the model stage that produced labels, if any did.
    pub model_stage: Option<String>,
    pub verdict: BiasVerdict,
    /// Human-readable note, set when nothing was detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl BiasFindingSet {
    /// Origin recorded for `label`, if it was detected.
    #[must_use]
    pub fn origin_of(&self, label: CanonicalLabel) -> Option<LabelOrigin> {
        self.origins
            .iter()
            .find(|finding| finding.label == label)
            .map(|finding| finding.origin)
    }

    #[must_use]
    pub fn contains(&self, label: CanonicalLabel) -> bool {
        self.labels.contains(&label)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
