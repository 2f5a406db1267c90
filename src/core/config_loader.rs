// src/core/config_loader.rs

//! Where the connection target and credentials come from.
//!
//! Precedence, highest first: positional arguments, environment variables,
//! the config file. Whatever is still missing afterwards is asked for
//! interactively by the binary.

use crate::{
    cli::Cli,
    constants::{ADDRESS_ENV_VAR, DEFAULT_TIMEOUT_SECS, PASSWORD_ENV_VAR},
    core::paths::{self, PathError},
};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config location could not be determined.
    #[error(transparent)]
    Path(#[from] PathError),
    /// The file exists but cannot be read.
    #[error("Could not read config file '{path}': {source}")]
    Read {
        /// The file that was read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown keys.
    #[error("Invalid config file '{path}': {source}")]
    Parse {
        /// The file that was parsed.
        path: String,
        /// The TOML error, with line and column.
        #[source]
        source: toml::de::Error,
    },
}

/// The optional `config.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Server address, `HOST:PORT`.
    pub address: Option<String>,
    /// RCON password.
    pub password: Option<String>,
    /// Reply timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Whether to keep a command history file.
    pub history: Option<bool>,
}

/// Everything the binary needs to open and run a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Server address; `None` means ask for it.
    pub address: Option<String>,
    /// RCON password; `None` means ask for it.
    pub password: Option<String>,
    /// How long to wait for each reply.
    pub timeout: Duration,
    /// Whether to load and save the command history.
    pub history: bool,
    /// Suppresses the connection banner.
    pub quiet: bool,
}

fn parse_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Loads the config file. An explicit `--config` path must exist; the default
/// location is optional.
pub fn load_file_config(explicit: Option<&str>) -> Result<FileConfig, ConfigError> {
    match explicit {
        Some(raw) => {
            let path = paths::expand_user_path(raw)?;
            log::debug!("Loading config from {}", path.display());
            parse_file(&path)
        }
        None => {
            let path = match paths::default_config_path() {
                Ok(path) => path,
                Err(e) => {
                    log::debug!("No default config location: {}", e);
                    return Ok(FileConfig::default());
                }
            };
            if path.is_file() {
                log::debug!("Loading config from {}", path.display());
                parse_file(&path)
            } else {
                Ok(FileConfig::default())
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Merges the sources. `env` is injected so tests never touch the process
/// environment.
pub fn resolve_settings(
    cli: &Cli,
    env: impl Fn(&str) -> Option<String>,
    file: FileConfig,
) -> ConnectionSettings {
    let address = non_blank(cli.address.clone())
        .or_else(|| non_blank(env(ADDRESS_ENV_VAR)))
        .or_else(|| non_blank(file.address));
    let password = non_blank(cli.password.clone())
        .or_else(|| non_blank(env(PASSWORD_ENV_VAR)))
        .or_else(|| non_blank(file.password));
    let timeout_secs = cli
        .timeout
        .or(file.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
        .max(1);

    ConnectionSettings {
        address,
        password,
        timeout: Duration::from_secs(timeout_secs),
        history: file.history.unwrap_or(true),
        quiet: cli.quiet,
    }
}
