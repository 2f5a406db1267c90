// src/system/rcon/error.rs

use thiserror::Error;

/// Failures raised by the transport. None of them are recoverable inside a
/// session: the console has no reconnect logic.
#[derive(Error, Debug)]
pub enum RconError {
    /// A socket error not covered by the variants below.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// No complete reply arrived within the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The connection is closed, by the server or by [`RemoteSession::close`](super::RemoteSession::close).
    #[error("the server closed the connection")]
    Disconnected,
    /// The login reply did not accept the password.
    #[error("the server rejected the password: {0}")]
    AuthRejected(String),
    /// A reply that cannot be framed or parsed.
    #[error("malformed server response: {0}")]
    Protocol(String),
}

impl RconError {
    /// Maps an I/O error onto the transport taxonomy. Read timeouts surface as
    /// `WouldBlock` on Unix and `TimedOut` on Windows.
    pub(crate) fn from_io(err: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match err.kind() {
            ErrorKind::WouldBlock | ErrorKind::TimedOut => Self::Timeout,
            ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe
            | ErrorKind::UnexpectedEof => Self::Disconnected,
            _ => Self::Io(err),
        }
    }
}
