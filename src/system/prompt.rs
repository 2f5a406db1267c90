// src/system/prompt.rs

use anyhow::Result;
use dialoguer::{Input, Password, theme::ColorfulTheme};

/// Asks for the server address until a non-blank answer is given.
pub fn ask_address() -> Result<String> {
    loop {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("bootstrap.prompt.address"))
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}

/// Asks for the RCON password (hidden) until a non-blank answer is given.
pub fn ask_password() -> Result<String> {
    loop {
        let answer = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("bootstrap.prompt.password"))
            .allow_empty_password(true)
            .interact()?;
        let answer = answer.trim();
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
    }
}
