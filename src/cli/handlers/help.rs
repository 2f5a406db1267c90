// src/cli/handlers/help.rs

use anyhow::Result;

use crate::{
    cli::{dispatcher, handlers::CommandContext},
    constants::QUIT_KEYWORD,
};

/// The detailed help text for `topic`, if there is one.
fn detail(topic: &str) -> Option<&'static str> {
    let text = match topic {
        "help" => t!("help.detail.help"),
        "status" => t!("help.detail.status"),
        "announce" => t!("help.detail.announce"),
        "players" => t!("help.detail.players"),
        "dm" => t!("help.detail.dm"),
        "info" => t!("help.detail.info"),
        "classes" => t!("help.detail.classes"),
        "whitelist" => t!("help.detail.whitelist"),
        "kick" => t!("help.detail.kick"),
        "wipe_corpses" => t!("help.detail.wipe_corpses"),
        "toggle_gc" => t!("help.detail.toggle_gc"),
        "toggle_humans" => t!("help.detail.toggle_humans"),
        "ai" => t!("help.detail.ai"),
        "send" => t!("help.detail.send"),
        "quit" => t!("help.detail.quit"),
        _ => return None,
    };
    Some(text)
}

/// `help [COMMAND]`. Purely local; an unknown topic falls back to the list.
pub fn handle(args: &[String], ctx: &mut CommandContext<'_>) -> Result<()> {
    let topic = args.first().map(|arg| arg.to_lowercase());
    if let Some(text) = topic.as_deref().and_then(detail) {
        writeln!(ctx.out, "{}", text)?;
        return Ok(());
    }

    writeln!(ctx.out, "{}", t!("help.list_header"))?;
    for command in dispatcher::registry() {
        writeln!(ctx.out, "    {:<14} {}", command.name, command.summary)?;
    }
    writeln!(ctx.out, "    {:<14} {}", QUIT_KEYWORD, t!("help.summary.quit"))?;
    writeln!(ctx.out)?;
    writeln!(ctx.out, "{}", t!("help.list_footer"))?;
    Ok(())
}
