//! Bias detection stages.
//!
//! Every stage answers "which labels does this text show?" and never fails:
//! a stage that cannot produce usable output returns an empty set
//! (stage-empty). The model stages are tried in order until one is
//! non-empty; the heuristic detector implements the same trait and runs as
//! the floor.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use lector_core::taxonomy::{CanonicalLabel, sanitize_label_strs, sanitize_labels};
use lector_model::{GenerateRequest, ModelClient};

use crate::extract::extract_json_array;
use crate::prompts;

/// One way of turning a text into canonical labels.
#[async_trait]
pub trait DetectionStrategy: Send + Sync {
    /// Short identifier used in logs and provenance.
    fn name(&self) -> &'static str;

    /// Labels detected in `text`; empty when the stage produced nothing usable.
    async fn attempt(&self, text: &str) -> BTreeSet<CanonicalLabel>;
}

/// Ask for a bare JSON array in structured, zero-temperature mode.
pub struct StrictJsonStage {
    model: Arc<dyn ModelClient>,
    num_ctx: u32,
}

impl StrictJsonStage {
    #[must_use]
    pub fn new(model: Arc<dyn ModelClient>, num_ctx: u32) -> Self {
        Self { model, num_ctx }
    }
}

#[async_trait]
impl DetectionStrategy for StrictJsonStage {
    fn name(&self) -> &'static str {
        "strict_json"
    }

    async fn attempt(&self, text: &str) -> BTreeSet<CanonicalLabel> {
        let request = GenerateRequest::new(prompts::strict_bias_prompt(text))
            .json()
            .temperature(0.0)
            .num_ctx(self.num_ctx);

        match self.model.generate(&request).await {
            Ok(response) => match extract_json_array(&response.text) {
                Some(values) => sanitize_labels(&values),
                None => {
                    tracing::debug!(stage = self.name(), "no JSON array in model response");
                    BTreeSet::new()
                }
            },
            Err(e) => {
                tracing::warn!(stage = self.name(), %e, "model stage failed");
                BTreeSet::new()
            }
        }
    }
}

/// Ask for a comma-separated list and scan it for canonical names.
pub struct FreeformStage {
    model: Arc<dyn ModelClient>,
}

impl FreeformStage {
    #[must_use]
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }
}

/// Canonical labels mentioned anywhere in a free-text answer.
#[must_use]
pub fn scan_label_mentions(raw: &str) -> BTreeSet<CanonicalLabel> {
    let lowered = raw.to_lowercase();
    let mentioned = CanonicalLabel::ALL
        .into_iter()
        .map(CanonicalLabel::as_str)
        .filter(|name| lowered.contains(&name.to_lowercase()));
    sanitize_label_strs(mentioned)
}

#[async_trait]
impl DetectionStrategy for FreeformStage {
    fn name(&self) -> &'static str {
        "freeform"
    }

    async fn attempt(&self, text: &str) -> BTreeSet<CanonicalLabel> {
        let request = GenerateRequest::new(prompts::freeform_bias_prompt(text)).temperature(0.0);
        match self.model.generate(&request).await {
            Ok(response) => scan_label_mentions(&response.text),
            Err(e) => {
                tracing::warn!(stage = self.name(), %e, "model stage failed");
                BTreeSet::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mentions_are_case_insensitive() {
        let found = scan_label_mentions("AD HOMINEM, falsa dicotomía");
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec![CanonicalLabel::AdHominem, CanonicalLabel::FalseDichotomy]
        );
    }

    #[test]
    fn none_answer_yields_nothing() {
        assert!(scan_label_mentions("ninguna").is_empty());
        assert!(scan_label_mentions("").is_empty());
    }

    #[test]
    fn unaccented_mentions_do_not_match() {
        // Only exact canonical spellings count in this stage.
        assert!(scan_label_mentions("falsa dicotomia").is_empty());
    }
}
