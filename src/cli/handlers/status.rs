// src/cli/handlers/status.rs

use anyhow::Result;

use crate::{cli::handlers::CommandContext, core::format::yes_no};

/// The main handler for the `status` command. Takes no arguments.
pub fn handle(_args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let details = ctx.session.server_details()?;

    writeln!(
        ctx.out,
        t!("status.report"),
        name = details.name,
        current = details.current_players,
        max = details.max_players,
        day = details.day_length_minutes,
        night = details.night_length_minutes,
        password = yes_no(details.has_password),
        global_chat = yes_no(details.global_chat_enabled),
        queue = yes_no(details.queue_enabled),
        whitelist = yes_no(details.whitelist_enabled),
    )?;
    Ok(())
}
