use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChatArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lector chat`.
pub async fn handle(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let reply = ctx.tutor.chat(&args.prompt).await?;
    output(&json!({ "reply": reply }), flags.format)
}
