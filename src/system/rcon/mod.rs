//! Remote administration over the RCON protocol.

mod client;
mod error;
pub mod protocol;
mod session;

pub use client::RconClient;
pub use error::RconError;
pub use session::RemoteSession;
