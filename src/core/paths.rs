// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, HISTORY_FILENAME};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    /// The platform has no config directory for this user.
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    /// The config directory is missing and could not be created.
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        /// The directory that was being created.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// `~` or a variable in a user path could not be expanded.
    #[error("Failed to expand path '{path}': {message}")]
    Expansion {
        /// The path as given.
        path: String,
        /// Why expansion failed.
        message: String,
    },
}

/// Returns `~/.config/pteroprompt` (or the platform equivalent) without
/// touching the filesystem.
pub fn config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Like [`config_dir`], but creates the directory when it is missing.
pub fn ensure_config_dir() -> Result<PathBuf, PathError> {
    let dir = config_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| PathError::ConfigDirCreation {
            path: dir.display().to_string(),
            source: e,
        })?;
    }
    Ok(dir)
}

/// Default location of the configuration file.
pub fn default_config_path() -> Result<PathBuf, PathError> {
    config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Location of the line-editor history, creating the config dir on demand.
pub fn history_path() -> Result<PathBuf, PathError> {
    ensure_config_dir().map(|dir| dir.join(HISTORY_FILENAME))
}

/// Expands `~` and environment variables (`$VAR`, `${VAR}`) in a user path.
pub fn expand_user_path(raw: &str) -> Result<PathBuf, PathError> {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .map_err(|e| PathError::Expansion {
            path: raw.to_string(),
            message: e.to_string(),
        })
}
