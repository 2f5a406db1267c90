// src/cli/dispatcher.rs

use anyhow::Result;
use std::fmt;

use crate::{
    cli::handlers::{self, CommandContext},
    models::CommandLine,
};

// --- Command Definition and Registry ---

/// The uniform handler signature: the arguments after the keyword and the
/// session context. Usage mistakes are reported by the handler itself and
/// return `Ok(())`.
pub type Handler = fn(&[String], &mut CommandContext<'_>) -> Result<()>;

/// Associates a command keyword with its handler and help summary.
pub struct CommandDefinition {
    /// The keyword, always lowercase.
    pub name: &'static str,
    /// One line shown by `help`.
    pub summary: &'static str,
    handler: Handler,
}

impl fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The single source of truth for all console commands, in help order.
/// `quit` is absent on purpose: the session loop intercepts it.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "help",
        summary: t!("help.summary.help"),
        handler: handlers::help::handle,
    },
    CommandDefinition {
        name: "status",
        summary: t!("help.summary.status"),
        handler: handlers::status::handle,
    },
    CommandDefinition {
        name: "announce",
        summary: t!("help.summary.announce"),
        handler: handlers::announce::handle,
    },
    CommandDefinition {
        name: "players",
        summary: t!("help.summary.players"),
        handler: handlers::players::handle,
    },
    CommandDefinition {
        name: "dm",
        summary: t!("help.summary.dm"),
        handler: handlers::dm::handle,
    },
    CommandDefinition {
        name: "info",
        summary: t!("help.summary.info"),
        handler: handlers::info::handle,
    },
    CommandDefinition {
        name: "classes",
        summary: t!("help.summary.classes"),
        handler: handlers::classes::handle,
    },
    CommandDefinition {
        name: "whitelist",
        summary: t!("help.summary.whitelist"),
        handler: handlers::whitelist::handle,
    },
    CommandDefinition {
        name: "kick",
        summary: t!("help.summary.kick"),
        handler: handlers::kick::handle,
    },
    CommandDefinition {
        name: "wipe_corpses",
        summary: t!("help.summary.wipe_corpses"),
        handler: handlers::toggles::handle_wipe_corpses,
    },
    CommandDefinition {
        name: "toggle_gc",
        summary: t!("help.summary.toggle_gc"),
        handler: handlers::toggles::handle_global_chat,
    },
    CommandDefinition {
        name: "toggle_humans",
        summary: t!("help.summary.toggle_humans"),
        handler: handlers::toggles::handle_humans,
    },
    CommandDefinition {
        name: "ai",
        summary: t!("help.summary.ai"),
        handler: handlers::ai::handle,
    },
    CommandDefinition {
        name: "send",
        summary: t!("help.summary.send"),
        handler: handlers::send::handle,
    },
];

/// Every registered command, in help order.
pub fn registry() -> &'static [CommandDefinition] {
    COMMAND_REGISTRY
}

/// Routes a parsed command line to its handler.
///
/// Built once at startup and shared by reference; the table it reads is
/// immutable, so no synchronisation is involved.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    commands: &'static [CommandDefinition],
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher over the standard command table.
    pub fn new() -> Self {
        Self {
            commands: COMMAND_REGISTRY,
        }
    }

    /// Finds a command by keyword, ignoring ASCII case.
    pub fn find(&self, keyword: &str) -> Option<&'static CommandDefinition> {
        self.commands
            .iter()
            .find(|cmd| cmd.name.eq_ignore_ascii_case(keyword))
    }

    /// Invokes the handler for `line.keyword`. An unknown keyword is reported
    /// on the output and is not an error.
    pub fn dispatch(&self, line: &CommandLine, ctx: &mut CommandContext<'_>) -> Result<()> {
        log::debug!("Dispatching {:?} with args {:?}", line.keyword, line.args);

        match self.find(&line.keyword) {
            Some(command) => (command.handler)(&line.args, ctx),
            None => {
                writeln!(
                    ctx.out,
                    t!("dispatch.unknown_command"),
                    command = line.keyword
                )?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSession, run_line};

    #[test]
    fn test_every_surface_keyword_is_registered() {
        let dispatcher = Dispatcher::new();
        for keyword in [
            "help",
            "status",
            "announce",
            "players",
            "dm",
            "info",
            "classes",
            "whitelist",
            "kick",
            "wipe_corpses",
            "toggle_gc",
            "toggle_humans",
            "ai",
            "send",
        ] {
            assert!(dispatcher.find(keyword).is_some(), "missing {}", keyword);
        }
        assert!(dispatcher.find("quit").is_none());
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Dispatcher::new().find("StAtUs").unwrap().name, "status");
    }

    #[test]
    fn test_unknown_keyword_is_reported_not_failed() {
        let mut session = RecordingSession::default();
        let (result, output) = run_line(&mut session, "teleport Alice");

        assert!(result.is_ok());
        assert_eq!(
            output,
            "Unknown command teleport. Type \"help\" for a list of commands.\n"
        );
        assert!(session.calls().is_empty());
    }

    #[test]
    fn test_commands_missing_arguments_never_reach_the_server() {
        for line in [
            "announce", "dm", "dm Alice", "info", "kick", "send", "classes", "classes allow",
            "whitelist", "whitelist add", "whitelist remove", "ai", "ai disable", "ai density",
        ] {
            let mut session = RecordingSession::default();
            let (result, output) = run_line(&mut session, line);
            assert!(result.is_ok(), "{} failed", line);
            assert!(!output.is_empty(), "{} printed nothing", line);
            assert!(session.calls().is_empty(), "{} called {:?}", line, session.calls());
        }
    }
}
