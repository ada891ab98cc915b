//! Command handlers for the hub binary.

use std::io::Write;

use remotehub_cli::error::{CLIError, Result};

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod tasks;
pub mod teams;
pub mod users;

/// Prompt on stdout and read one trimmed line from stdin.
///
/// EOF (closed stdin) counts as cancelling the operation.
pub(crate) fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(CLIError::Cancelled);
    }
    Ok(line.trim().to_string())
}

/// Prompt for a password without echoing it.
pub(crate) fn prompt_password(prompt: &str) -> Result<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| CLIError::InputError(format!("Failed to read password: {}", e)))
}
