//! Bias and fallacy detection.
//!
//! Model stages (strict JSON, then freeform text) are tried in order until
//! one yields labels. The heuristic detector always runs, concurrently with
//! the model chain, and its labels are merged in. Model failures never reach
//! the caller: the worst case is the heuristic result alone.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use lector_core::entities::{BiasFindingSet, LabelFinding};
use lector_core::enums::{BiasVerdict, LabelOrigin};
use lector_core::errors::require_text;
use lector_core::taxonomy::CanonicalLabel;
use lector_model::ModelClient;

use crate::error::PipelineError;
use crate::heuristic::HeuristicDetector;
use crate::strategy::{DetectionStrategy, FreeformStage, StrictJsonStage};

/// Note attached to an analysis that found nothing.
pub const NO_FINDINGS_DETAIL: &str =
    "No biases were detected by the model stages or the heuristic floor.";

/// Labels produced by the first model stage that found anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutcome {
    pub stage: &'static str,
    pub labels: BTreeSet<CanonicalLabel>,
}

/// Orchestrates the model stages and the heuristic floor.
pub struct BiasPipeline {
    model_stages: Vec<Arc<dyn DetectionStrategy>>,
    floor: Arc<dyn DetectionStrategy>,
}

impl BiasPipeline {
    /// Standard chain: strict JSON, freeform, heuristic floor.
    #[must_use]
    pub fn new(model: Arc<dyn ModelClient>, detector: Arc<HeuristicDetector>, num_ctx: u32) -> Self {
        let model_stages: Vec<Arc<dyn DetectionStrategy>> = vec![
            Arc::new(StrictJsonStage::new(Arc::clone(&model), num_ctx)),
            Arc::new(FreeformStage::new(model)),
        ];
        Self::with_stages(model_stages, detector)
    }

    /// Custom model stages in priority order, plus the floor.
    #[must_use]
    pub fn with_stages(
        model_stages: Vec<Arc<dyn DetectionStrategy>>,
        floor: Arc<dyn DetectionStrategy>,
    ) -> Self {
        Self {
            model_stages,
            floor,
        }
    }

    /// Detect biases in `source_text`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidInput`] for a blank text. No other
    /// error is possible.
    pub async fn detect_biases(&self, source_text: &str) -> Result<BiasFindingSet, PipelineError> {
        require_text("text", source_text)?;

        let (model_outcome, heuristic) =
            tokio::join!(self.run_model_stages(source_text), self.floor.attempt(source_text));

        let findings = merge_findings(source_text, model_outcome, &heuristic);
        tracing::info!(
            labels = findings.labels.len(),
            model_stage = findings.model_stage.as_deref().unwrap_or("none"),
            verdict = %findings.verdict,
            "bias analysis complete"
        );
        Ok(findings)
    }

    async fn run_model_stages(&self, text: &str) -> Option<StageOutcome> {
        for stage in &self.model_stages {
            let labels = stage.attempt(text).await;
            if labels.is_empty() {
                tracing::debug!(stage = stage.name(), "stage empty, falling through");
                continue;
            }
            return Some(StageOutcome {
                stage: stage.name(),
                labels,
            });
        }
        None
    }
}

/// Union of the model outcome and the heuristic labels, with provenance.
#[must_use]
pub fn merge_findings(
    source_text: &str,
    model_outcome: Option<StageOutcome>,
    heuristic: &BTreeSet<CanonicalLabel>,
) -> BiasFindingSet {
    let mut origins: BTreeMap<CanonicalLabel, LabelOrigin> = BTreeMap::new();
    let model_stage = model_outcome.map(|outcome| {
        for label in outcome.labels {
            origins.insert(label, LabelOrigin::Model);
        }
        outcome.stage.to_string()
    });
    for &label in heuristic {
        origins
            .entry(label)
            .and_modify(|origin| *origin = origin.merge(LabelOrigin::Heuristic))
            .or_insert(LabelOrigin::Heuristic);
    }

    let labels: Vec<CanonicalLabel> = origins.keys().copied().collect();
    let (verdict, detail) = if labels.is_empty() {
        (BiasVerdict::NoFindings, Some(NO_FINDINGS_DETAIL.to_string()))
    } else {
        (BiasVerdict::Detected, None)
    };

    BiasFindingSet {
        source_text: source_text.to_string(),
        labels,
        origins: origins
            .into_iter()
            .map(|(label, origin)| LabelFinding { label, origin })
            .collect(),
        model_stage,
        verdict,
        detail,
    }
}
