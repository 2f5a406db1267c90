// src/cli/handlers/dm.rs

use anyhow::Result;

use crate::cli::handlers::{CommandContext, commons};

/// `dm PLAYER_NAME MESSAGE...`
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some((name, words)) = args.split_first() else {
        return commons::report_missing(ctx, "PLAYER_NAME");
    };
    if words.is_empty() {
        return commons::report_missing(ctx, "MESSAGE");
    }

    let player_id = commons::require_player(ctx, name)?;
    ctx.session.direct_message(&player_id, &words.join(" "))?;
    writeln!(ctx.out, t!("dm.sent"), name = name)?;
    Ok(())
}
