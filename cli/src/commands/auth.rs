//! Sign-in, sign-out, registration, and password recovery.

use remotehub_cli::error::{CLIError, Result};
use remotehub_cli::helpers::{validate_email, validate_password};
use remotehub_link::RegisterRequest;

use crate::commands::{prompt_line, prompt_password};
use crate::connect::AppContext;

pub async fn login(
    context: &AppContext,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => prompt_line("Username: ")?,
    };
    let password = match password {
        Some(password) => password,
        None => prompt_password("Password: ")?,
    };

    // The session's on_login hook prints the confirmation.
    context.client.login(&username, &password).await?;
    Ok(())
}

pub fn logout(context: &AppContext) -> Result<()> {
    // Local sign-out only; the on_logout hook prints the confirmation.
    context.client.logout();
    Ok(())
}

pub async fn whoami(context: &AppContext) -> Result<()> {
    context.require(None)?;
    let me = context.client.users().me().await?;
    print!("{}", context.formatter.format_identity(&me)?);
    Ok(())
}

pub async fn register(context: &AppContext) -> Result<()> {
    let username = prompt_line("Username: ")?;
    let email = prompt_line("Email: ")?;
    if !validate_email(&email) {
        return Err(CLIError::InputError(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    let password = prompt_password("Password: ")?;
    let problems = validate_password(&password);
    if !problems.is_empty() {
        return Err(CLIError::InputError(problems.join("\n")));
    }
    let confirm = prompt_password("Confirm password: ")?;
    if password != confirm {
        return Err(CLIError::InputError("Passwords do not match".to_string()));
    }

    let first_name = prompt_line("First name: ")?;
    let last_name = prompt_line("Last name: ")?;

    let request = RegisterRequest {
        username,
        email,
        password,
        first_name,
        last_name,
    };
    let response = context.client.auth().register(&request).await?;
    println!(
        "{}",
        response
            .message
            .unwrap_or_else(|| "Registration successful! You can now sign in.".to_string())
    );
    Ok(())
}

pub async fn forgot_password(context: &AppContext, email: &str) -> Result<()> {
    if !validate_email(email) {
        return Err(CLIError::InputError(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    let response = context.client.auth().forgot_password(email).await?;
    println!("{}", response.message_or("Password reset link sent to email!"));
    Ok(())
}

pub async fn reset_password(
    context: &AppContext,
    token: &str,
    password: Option<String>,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => {
            let password = prompt_password("New password: ")?;
            let confirm = prompt_password("Confirm password: ")?;
            if password != confirm {
                return Err(CLIError::InputError("Passwords do not match".to_string()));
            }
            password
        }
    };

    let problems = validate_password(&password);
    if !problems.is_empty() {
        return Err(CLIError::InputError(problems.join("\n")));
    }

    let response = context.client.auth().reset_password(token, &password).await?;
    println!(
        "{}",
        response.message_or("Password has been reset successfully!")
    );
    Ok(())
}
