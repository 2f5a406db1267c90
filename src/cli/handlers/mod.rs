// src/cli/handlers/mod.rs

// One module per console command. Every handler has the same signature
// (see `dispatcher::Handler`) and writes its report to `ctx.out`.

use crate::system::rcon::RemoteSession;
use std::fmt;
use std::io::Write;

pub mod ai;
pub mod announce;
pub mod classes;
pub mod commons;
pub mod dm;
pub mod help;
pub mod info;
pub mod kick;
pub mod players;
pub mod send;
pub mod status;
pub mod toggles;
pub mod whitelist;

/// What a handler gets to work with: the remote session and the sink for
/// its report. Both are borrowed from the session loop for one command.
pub struct CommandContext<'a> {
    pub session: &'a mut dyn RemoteSession,
    pub out: &'a mut dyn Write,
}

impl fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext").finish_non_exhaustive()
    }
}
