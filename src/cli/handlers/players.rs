// src/cli/handlers/players.rs

use anyhow::Result;

use crate::cli::handlers::CommandContext;

pub fn handle(_args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let players = ctx.session.player_list()?;

    writeln!(ctx.out, "{}", t!("players.header"))?;
    for player in &players {
        writeln!(ctx.out, "    {}", player.name)?;
    }
    Ok(())
}
