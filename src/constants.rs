// src/constants.rs

//! Names and defaults shared across the crate.

/// Environment variable holding the server address (`HOST:PORT`).
pub const ADDRESS_ENV_VAR: &str = "PTEROPROMPT_RCON_ADDRESS";

/// Environment variable holding the RCON password.
pub const PASSWORD_ENV_VAR: &str = "PTEROPROMPT_RCON_PASSWORD";

/// The name of the directory holding pteroprompt files inside the system config dir.
pub const CONFIG_DIR_NAME: &str = "pteroprompt";

/// The name of the optional configuration file (inside the config dir).
pub const CONFIG_FILENAME: &str = "config.toml";

/// The name of the line-editor history file (inside the config dir).
pub const HISTORY_FILENAME: &str = "history.txt";

/// Seconds to wait for a server reply before a request counts as timed out.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// The prompt shown in front of every command line.
pub const PROMPT: &str = "> ";

/// The keyword that ends the session without going through the dispatcher.
pub const QUIT_KEYWORD: &str = "quit";
