use serde::Serialize;

use lector_analysis::TextAnalysis;
use lector_core::entities::{BiasFindingSet, GeneratedQuestionSet};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::read_source;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    questions: Option<GeneratedQuestionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    questions_error: Option<String>,
    biases: BiasFindingSet,
}

impl From<TextAnalysis> for AnalyzeResponse {
    fn from(analysis: TextAnalysis) -> Self {
        let (questions, questions_error) = match analysis.questions {
            Ok(set) => (Some(set), None),
            Err(error) => (None, Some(error.to_string())),
        };
        Self {
            questions,
            questions_error,
            biases: analysis.biases,
        }
    }
}

/// Handle `lector analyze`.
///
/// A question failure is reported in the output next to the bias findings
/// instead of failing the command.
pub async fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_source(&args.source)?;
    let analysis = ctx.tutor.analyze(&text).await?;
    if let Err(error) = &analysis.questions {
        tracing::warn!(%error, "question generation failed; reporting biases only");
    }
    output(&AnalyzeResponse::from(analysis), flags.format)
}
