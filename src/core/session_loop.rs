// src/core/session_loop.rs

//! The read, dispatch, report cycle that drives one console session.

use std::io::Write;

use crate::{
    cli::{dispatcher::Dispatcher, handlers::CommandContext},
    constants::QUIT_KEYWORD,
    core::error_policy::{self, Disposition},
    models::CommandLine,
    system::{
        input::{InputError, LineSource},
        rcon::RemoteSession,
    },
};

/// How the session ended, mapped onto a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// `quit` or end of input.
    Success,
    /// A fatal command failure or an unreadable input source.
    Failure,
    /// The operator pressed Ctrl-C at the prompt.
    Interrupted,
}

impl ExitStatus {
    /// The process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
            Self::Interrupted => 130,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Terminating(ExitStatus),
}

/// Owns the remote session and the input source for the lifetime of the
/// console. Both are closed when [`SessionLoop::run`] returns, whatever the
/// exit path.
pub struct SessionLoop<'a> {
    dispatcher: &'a Dispatcher,
    session: Box<dyn RemoteSession + 'a>,
    input: Box<dyn LineSource + 'a>,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl std::fmt::Debug for SessionLoop<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionLoop")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl<'a> SessionLoop<'a> {
    /// `out` receives command reports, `err` receives fatal diagnostics.
    pub fn new(
        dispatcher: &'a Dispatcher,
        session: Box<dyn RemoteSession + 'a>,
        input: Box<dyn LineSource + 'a>,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            dispatcher,
            session,
            input,
            out,
            err,
        }
    }

    /// Reads and executes commands until the session terminates.
    pub fn run(self) -> ExitStatus {
        let mut this = scopeguard::guard(self, |mut this| this.shutdown());
        loop {
            if let LoopState::Terminating(status) = this.step() {
                log::debug!("Session terminating with {:?}", status);
                return status;
            }
        }
    }

    /// One iteration: read a line, then dispatch it unless it is blank or `quit`.
    fn step(&mut self) -> LoopState {
        let line = match self.input.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => return LoopState::Terminating(ExitStatus::Success),
            Err(e) => {
                let message = format!(t!("session.error.input"), error = e);
                emit(&mut *self.err, &message);
                let status = match e {
                    InputError::Interrupted => ExitStatus::Interrupted,
                    _ => ExitStatus::Failure,
                };
                return LoopState::Terminating(status);
            }
        };

        let Some(command) = CommandLine::parse(&line) else {
            return LoopState::Running;
        };
        if command.keyword == QUIT_KEYWORD {
            return LoopState::Terminating(ExitStatus::Success);
        }

        let mut ctx = CommandContext {
            session: self.session.as_mut(),
            out: &mut *self.out,
        };
        let Err(e) = self.dispatcher.dispatch(&command, &mut ctx) else {
            return LoopState::Running;
        };

        match error_policy::classify(&e) {
            Disposition::Recoverable(message) => {
                log::debug!("'{}' failed recoverably: {}", command.keyword, e);
                emit(&mut *self.out, &message);
                LoopState::Running
            }
            Disposition::Fatal => {
                log::error!("'{}' failed: {:?}", command.keyword, e);
                let message = format!(
                    t!("session.error.command_failed"),
                    command = command.keyword,
                    error = format!("{:#}", e)
                );
                emit(&mut *self.err, &message);
                LoopState::Terminating(ExitStatus::Failure)
            }
        }
    }

    fn shutdown(&mut self) {
        if let Err(e) = self.session.close() {
            log::warn!("Failed to close the remote session: {}", e);
        }
        self.input.close();
        if let Err(e) = self.out.flush() {
            log::debug!("Failed to flush output: {}", e);
        }
    }
}

/// Writes one line to a sink whose failure has nowhere left to be reported.
fn emit(sink: &mut dyn Write, message: &str) {
    if let Err(e) = writeln!(sink, "{}", message) {
        log::warn!("Failed to write to the console: {}", e);
    }
}
