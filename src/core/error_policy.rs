// src/core/error_policy.rs

//! Decides which failures a session survives.
//!
//! The console cannot reconnect, so only conditions a handler raised on
//! purpose are recoverable. Everything else, including transport timeouts on
//! known commands, ends the session.

use thiserror::Error;

/// Domain conditions raised by command handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A name did not match any connected player.
    #[error("player \"{name}\" not found")]
    PlayerNotFound {
        /// The name as typed.
        name: String,
    },
    /// A raw command got no reply before the timeout.
    #[error("no response to command 0x{code:02x}")]
    NoResponse {
        /// The command byte that was sent.
        code: u8,
    },
}

/// What the session loop should do with a failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Print the one-line message and keep reading commands.
    Recoverable(String),
    /// Report the error and terminate with a non-zero status.
    Fatal,
}

/// Classifies a handler failure by its kind.
pub fn classify(err: &anyhow::Error) -> Disposition {
    match err.downcast_ref::<CommandError>() {
        Some(CommandError::PlayerNotFound { name }) => {
            Disposition::Recoverable(format!(t!("common.player_not_found"), name = name))
        }
        Some(CommandError::NoResponse { .. }) => {
            Disposition::Recoverable(t!("send.no_response").to_string())
        }
        None => Disposition::Fatal,
    }
}
