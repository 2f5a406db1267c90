//! pteroprompt: an interactive RCON console for The Isle: Evrima servers.
//!
//! The crate is split the same way the binary uses it:
//!
//! - [`cli`]: bootstrap arguments, the command table and one handler per command.
//! - [`core`]: name resolution, class selectors, error classification, the
//!   session loop and configuration loading.
//! - [`system`]: the RCON transport, the line editor and interactive prompts.
//! - [`models`]: plain data exchanged between those layers.

include!(concat!(env!("OUT_DIR"), "/translations.rs"));

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod system;

#[cfg(test)]
mod testing;
