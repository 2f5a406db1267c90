// src/cli/handlers/whitelist.rs

use anyhow::Result;

use crate::{
    cli::handlers::{CommandContext, commons},
    core::resolver,
    system::rcon::RconError,
};

/// One name of an add/remove batch and what was submitted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    /// The name as typed.
    pub input: String,
    /// The resolved identifier, or `input` verbatim when the name is not
    /// connected.
    pub submitted: String,
    /// Whether `submitted` came from the roster.
    pub resolved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchAction {
    Add,
    Remove,
}

/// Resolves every name independently, in input order. A name that is not in
/// the roster is kept as a literal identifier; only transport failures abort.
pub fn resolve_batch(
    ctx: &mut CommandContext<'_>,
    names: &[String],
) -> Result<Vec<BatchEntry>, RconError> {
    names
        .iter()
        .map(|name| {
            let resolution = resolver::resolve(ctx.session, name)?;
            let resolved = resolution.is_resolved();
            if !resolved {
                log::warn!("'{}' is not connected; submitting it as a raw ID", name);
            }
            Ok(BatchEntry {
                input: name.clone(),
                submitted: resolution.or_literal(name),
                resolved,
            })
        })
        .collect()
}

/// The main handler for the `whitelist` command.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let Some((subcommand, rest)) = commons::split_subcommand(ctx, "whitelist", args)? else {
        return Ok(());
    };

    match subcommand.as_str() {
        "toggle" => {
            let enabled = ctx.session.toggle_whitelist()?;
            let message = if enabled {
                t!("whitelist.now_on")
            } else {
                t!("whitelist.now_off")
            };
            writeln!(ctx.out, "{}", message)?;
        }
        "status" => {
            let details = ctx.session.server_details()?;
            let message = if details.whitelist_enabled {
                t!("whitelist.currently_on")
            } else {
                t!("whitelist.currently_off")
            };
            writeln!(ctx.out, "{}", message)?;
        }
        "add" => submit_batch(ctx, rest, BatchAction::Add)?,
        "remove" => submit_batch(ctx, rest, BatchAction::Remove)?,
        other => commons::report_invalid_subcommand(ctx, "whitelist", other)?,
    }
    Ok(())
}

fn submit_batch(ctx: &mut CommandContext<'_>, names: &[String], action: BatchAction) -> Result<()> {
    if names.is_empty() {
        writeln!(ctx.out, "{}", t!("whitelist.no_ids"))?;
        return Ok(());
    }

    let entries = resolve_batch(ctx, names)?;
    for entry in entries.iter().filter(|entry| !entry.resolved) {
        writeln!(ctx.out, t!("whitelist.fallback_note"), name = entry.input)?;
    }

    let ids: Vec<String> = entries.into_iter().map(|entry| entry.submitted).collect();
    match action {
        BatchAction::Add => ctx.session.add_whitelist_ids(&ids)?,
        BatchAction::Remove => ctx.session.remove_whitelist_ids(&ids)?,
    }

    let listed = ids.join(", ");
    match action {
        BatchAction::Add => writeln!(
            ctx.out,
            t!("whitelist.added"),
            count = ids.len(),
            ids = listed
        )?,
        BatchAction::Remove => writeln!(
            ctx.out,
            t!("whitelist.removed"),
            count = ids.len(),
            ids = listed
        )?,
    }
    Ok(())
}
