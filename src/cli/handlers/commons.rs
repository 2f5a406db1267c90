// src/cli/handlers/commons.rs

// Helpers shared by several handlers.

use anyhow::Result;

use crate::{
    cli::handlers::CommandContext,
    core::{
        error_policy::CommandError,
        resolver::{self, Resolution},
    },
};

/// Prints the one-line usage complaint for a missing argument.
pub fn report_missing(ctx: &mut CommandContext<'_>, argument: &str) -> Result<()> {
    writeln!(ctx.out, t!("common.missing_argument"), argument = argument)?;
    Ok(())
}

/// Splits `COMMAND SUBCOMMAND [ARG...]` arguments into the lowercased
/// subcommand keyword and its own arguments. Prints guidance and returns
/// `None` when no subcommand was given.
pub fn split_subcommand<'a>(
    ctx: &mut CommandContext<'_>,
    command: &str,
    args: &'a [String],
) -> Result<Option<(String, &'a [String])>> {
    match args.split_first() {
        Some((first, rest)) => Ok(Some((first.to_lowercase(), rest))),
        None => {
            writeln!(ctx.out, "{}", t!("subcommand.missing"))?;
            writeln!(ctx.out, t!("subcommand.help_hint"), command = command)?;
            Ok(None)
        }
    }
}

/// Prints guidance for a subcommand keyword the command does not know.
pub fn report_invalid_subcommand(
    ctx: &mut CommandContext<'_>,
    command: &str,
    subcommand: &str,
) -> Result<()> {
    writeln!(ctx.out, t!("subcommand.invalid"), subcommand = subcommand)?;
    writeln!(ctx.out, t!("subcommand.help_hint"), command = command)?;
    Ok(())
}

/// Resolves a player name that must belong to a connected player.
/// An unknown name surfaces as [`CommandError::PlayerNotFound`].
pub fn require_player(ctx: &mut CommandContext<'_>, name: &str) -> Result<String> {
    match resolver::resolve(ctx.session, name)? {
        Resolution::Resolved(id) => Ok(id),
        Resolution::NotFound => Err(CommandError::PlayerNotFound {
            name: name.to_string(),
        }
        .into()),
    }
}
