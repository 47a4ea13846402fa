use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuestionsArgs;
use crate::commands::shared::read_source;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lector questions`.
pub async fn handle(
    args: &QuestionsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = read_source(&args.source)?;
    let set = ctx.tutor.generate_questions(&text).await?;
    output(&set, flags.format)
}
