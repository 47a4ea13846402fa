use crate::cli::GlobalFlags;
use crate::cli::root_commands::GradeArgs;
use crate::commands::shared::read_source;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lector grade`.
pub async fn handle(args: &GradeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_source(&args.source)?;
    let graded = ctx
        .tutor
        .grade_answer(&text, &args.question, &args.answer)
        .await?;
    output(&graded, flags.format)
}
