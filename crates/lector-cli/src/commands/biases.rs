use crate::cli::GlobalFlags;
use crate::cli::root_commands::BiasesArgs;
use crate::commands::shared::read_source;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lector biases`.
pub async fn handle(args: &BiasesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = read_source(&args.source)?;
    let findings = ctx.tutor.detect_biases(&text).await?;
    output(&findings, flags.format)
}
