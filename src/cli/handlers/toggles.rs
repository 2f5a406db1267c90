// src/cli/handlers/toggles.rs

// Argument-less server switches.

use anyhow::Result;

use crate::cli::handlers::CommandContext;

/// `wipe_corpses`
pub fn handle_wipe_corpses(_args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    ctx.session.wipe_corpses()?;
    writeln!(ctx.out, "{}", t!("wipe_corpses.done"))?;
    Ok(())
}

/// `toggle_gc`
pub fn handle_global_chat(_args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let enabled = ctx.session.toggle_global_chat()?;
    let message = if enabled {
        t!("toggle_gc.now_on")
    } else {
        t!("toggle_gc.now_off")
    };
    writeln!(ctx.out, "{}", message)?;
    Ok(())
}

/// `toggle_humans`
pub fn handle_humans(_args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let enabled = ctx.session.toggle_humans()?;
    let message = if enabled {
        t!("toggle_humans.now_on")
    } else {
        t!("toggle_humans.now_off")
    };
    writeln!(ctx.out, "{}", message)?;
    Ok(())
}
