// src/cli/mod.rs

//! The operator-facing surface: bootstrap arguments, the command table and
//! the handlers behind it.

mod args;
pub mod dispatcher;
pub mod handlers;

pub use args::Cli;
