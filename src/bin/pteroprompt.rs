// src/bin/pteroprompt.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use pteroprompt::{
    cli::{Cli, dispatcher::Dispatcher},
    core::{
        config_loader::{self, ConnectionSettings},
        paths,
        session_loop::{ExitStatus, SessionLoop},
    },
    system::{input::ReadlineInput, prompt, rcon::RconClient},
    t,
};
use std::io;

/// The entry point: sets up logging, bootstraps the connection, runs the
/// console and performs centralized error handling for the bootstrap phase.
fn main() {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(status) => std::process::exit(status.code()),
        Err(e) => {
            eprintln!("{}: {:#}", t!("bootstrap.error.prefix").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<ExitStatus> {
    log::debug!(
        "Starting with quiet={}, config={:?}, timeout={:?}",
        cli.quiet,
        cli.config,
        cli.timeout
    );

    let file_config = config_loader::load_file_config(cli.config.as_deref())?;
    let settings = config_loader::resolve_settings(&cli, |key| std::env::var(key).ok(), file_config);

    let address = match settings.address.clone() {
        Some(address) => address,
        None => prompt::ask_address()?,
    };
    let password = match settings.password.clone() {
        Some(password) => password,
        None => prompt::ask_password()?,
    };

    let client = connect(&address, &password, &settings)?;
    if !settings.quiet {
        println!(t!("bootstrap.connected"), address = address);
    }

    let input = ReadlineInput::new(history_location(&settings))?;
    let dispatcher = Dispatcher::new();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let status = SessionLoop::new(
        &dispatcher,
        Box::new(client),
        Box::new(input),
        &mut out,
        &mut err,
    )
    .run();
    Ok(status)
}

/// Opens the connection and logs in, turning either failure into the
/// operator-facing bootstrap message.
fn connect(address: &str, password: &str, settings: &ConnectionSettings) -> Result<RconClient> {
    let mut client = RconClient::connect(address, settings.timeout).map_err(|e| {
        anyhow::Error::msg(format!(
            t!("bootstrap.error.cannot_connect"),
            address = address,
            error = e
        ))
    })?;

    client.authenticate(password).map_err(|e| {
        anyhow::Error::msg(format!(
            t!("bootstrap.error.cannot_authenticate"),
            address = address,
            error = e
        ))
    })?;

    log::info!("Connected to {} with a {:?} reply timeout", address, settings.timeout);
    Ok(client)
}

/// Where to persist line-editor history, if anywhere. A config directory that
/// cannot be created only costs the history.
fn history_location(settings: &ConnectionSettings) -> Option<std::path::PathBuf> {
    if !settings.history {
        return None;
    }
    match paths::history_path() {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("Command history disabled: {}", e);
            None
        }
    }
}
