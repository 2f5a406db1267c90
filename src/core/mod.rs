// src/core/mod.rs

pub mod config_loader;
pub mod error_policy;
pub mod format;
pub mod paths;
pub mod resolver;
pub mod selector;
pub mod session_loop;
