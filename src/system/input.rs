// src/system/input.rs

use crate::constants::PROMPT;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    /// Ctrl-C at the prompt.
    #[error("interrupted")]
    Interrupted,
    /// The terminal could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Any other line editor failure.
    #[error("line editor failure: {0}")]
    Editor(String),
}

/// Supplies the operator's input one line at a time.
pub trait LineSource {
    /// Blocks until a line is available. `Ok(None)` means end of input.
    fn read_line(&mut self) -> Result<Option<String>, InputError>;

    /// Releases the source (e.g. flushes history). Safe to call more than once.
    fn close(&mut self) {}
}

/// Interactive input with line editing and optional persistent history.
pub struct ReadlineInput {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl std::fmt::Debug for ReadlineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadlineInput")
            .field("history_path", &self.history_path)
            .finish_non_exhaustive()
    }
}

impl ReadlineInput {
    /// Creates the editor and loads history from `history_path` if given.
    pub fn new(history_path: Option<PathBuf>) -> Result<Self, InputError> {
        let mut editor = DefaultEditor::new().map_err(editor_error)?;
        if let Some(path) = &history_path {
            // A missing history file is the normal first-run case.
            if let Err(e) = editor.load_history(path) {
                log::debug!("No history loaded from {}: {}", path.display(), e);
            }
        }
        Ok(Self {
            editor,
            history_path,
        })
    }
}

fn editor_error(err: ReadlineError) -> InputError {
    match err {
        ReadlineError::Interrupted => InputError::Interrupted,
        ReadlineError::Io(e) => InputError::Io(e),
        other => InputError::Editor(other.to_string()),
    }
}

impl LineSource for ReadlineInput {
    fn read_line(&mut self) -> Result<Option<String>, InputError> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    if let Err(e) = self.editor.add_history_entry(trimmed) {
                        log::debug!("Could not record history entry: {}", e);
                    }
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(editor_error(e)),
        }
    }

    fn close(&mut self) {
        if let Some(path) = self.history_path.take() {
            if let Err(e) = self.editor.save_history(&path) {
                log::warn!("Failed to save history to {}: {}", path.display(), e);
            }
        }
    }
}
