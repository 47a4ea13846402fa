use serde::Serialize;

use lector_core::entities::GeneratedQuestionSet;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct HistoryResponse {
    question_sets: Vec<GeneratedQuestionSet>,
}

/// Handle `lector history`.
pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let question_sets = ctx.tutor.list_question_sets(args.limit).await?;
    output(&HistoryResponse { question_sets }, flags.format)
}
