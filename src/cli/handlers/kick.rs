// src/cli/handlers/kick.rs

use anyhow::Result;

use crate::cli::handlers::{CommandContext, commons};

/// `kick PLAYER_NAME [REASON...]`. Without a reason the player sees the
/// default one.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some((name, words)) = args.split_first() else {
        return commons::report_missing(ctx, "PLAYER_NAME");
    };
    let reason = if words.is_empty() {
        t!("kick.default_reason").to_string()
    } else {
        words.join(" ")
    };

    let player_id = commons::require_player(ctx, name)?;
    ctx.session.kick_player(&player_id, &reason)?;
    log::info!("Kicked {} ({})", name, player_id);
    writeln!(ctx.out, t!("kick.done"), name = name, reason = reason)?;
    Ok(())
}
