// src/cli/args.rs
use clap::Parser;

/// pteroprompt: an interactive RCON console for The Isle: Evrima servers.
///
/// Connects to ADDRESS, logs in with PASSWORD and reads commands from the
/// terminal until `quit` or end of input. Missing values are taken from
/// `PTEROPROMPT_RCON_ADDRESS` / `PTEROPROMPT_RCON_PASSWORD`, then from the
/// config file, and are asked for interactively as a last resort.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print only command outputs (no connection banner).
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to a config file. Defaults to `~/.config/pteroprompt/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Seconds to wait for each server reply.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Server address and port, e.g. `203.0.113.7:8888`.
    pub address: Option<String>,

    /// RCON password. Prefer the environment variable or the prompt.
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positionals_and_flags() {
        let cli = Cli::try_parse_from(["pteroprompt", "-q", "host:1", "pw"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.address.as_deref(), Some("host:1"));
        assert_eq!(cli.password.as_deref(), Some("pw"));
    }

    #[test]
    fn test_too_many_positionals_is_a_usage_error() {
        assert!(Cli::try_parse_from(["pteroprompt", "a", "b", "c"]).is_err());
    }
}
