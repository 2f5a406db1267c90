// src/cli/handlers/info.rs

use anyhow::Result;

use crate::{
    cli::handlers::{CommandContext, commons},
    core::{error_policy::CommandError, format},
    models::{PlayerData, display_class_name},
};

/// The main handler for the `info` command.
///
/// Unlike the name resolver, this lookup ignores case: the player data
/// request already carries every name, so no extra roster fetch is needed.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some(name) = args.first() else {
        return commons::report_missing(ctx, "PLAYER_NAME");
    };
    let wanted = name.to_lowercase();

    let players = ctx.session.player_data()?;
    let player = players
        .iter()
        .find(|player| player.name.to_lowercase() == wanted)
        .ok_or_else(|| CommandError::PlayerNotFound { name: name.clone() })?;

    print_player(ctx, player)
}

fn print_player(ctx: &mut CommandContext<'_>, player: &PlayerData) -> Result<()> {
    writeln!(
        ctx.out,
        t!("info.report"),
        name = player.name,
        id = player.id,
        class = display_class_name(&player.class),
        growth = player.growth,
        health = player.health,
        stamina = player.stamina,
        hunger = player.hunger,
        thirst = player.thirst,
        location = format::map_coordinates(&player.location),
    )?;
    Ok(())
}
