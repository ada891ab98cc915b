//! Wires flags, config file, session storage, and the client together.

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use remotehub_cli::config::{CLIConfiguration, DEFAULT_SERVER_URL};
use remotehub_cli::error::{CLIError, Result};
use remotehub_cli::formatter::{OutputFormat, OutputFormatter};
use remotehub_cli::storage::FileSessionStorage;
use remotehub_link::access::{self, AccessDecision};
use remotehub_link::{RemoteHubClient, Role, SessionEvents, SessionStore};

use crate::args::Cli;

/// Everything a command handler needs.
pub struct AppContext {
    pub client: RemoteHubClient,
    pub session: Arc<SessionStore>,
    pub formatter: OutputFormatter,
}

impl AppContext {
    /// Gate a command on the session, exactly like a guarded screen:
    /// signed out fails with a sign-in hint, a role mismatch fails with
    /// the role name.
    pub fn require(&self, required: Option<Role>) -> Result<()> {
        match access::evaluate(&self.session.snapshot(), required) {
            AccessDecision::Render => Ok(()),
            AccessDecision::RedirectToLogin => Err(CLIError::NotSignedIn),
            AccessDecision::RedirectToDefault => Err(CLIError::PermissionDenied(
                required
                    .map(|role| role.label().to_string())
                    .unwrap_or_else(|| "required".to_string()),
            )),
            // hydrate() runs before any command; a loading session here
            // means storage was unreadable, so treat it as signed out.
            AccessDecision::Loading => Err(CLIError::NotSignedIn),
        }
    }
}

/// Build the application context from parsed flags and the config file.
///
/// Restores the persisted session (if any) before the client is built, so
/// the first request already carries the token.
pub fn create_context(cli: &Cli, config: &CLIConfiguration) -> Result<AppContext> {
    let ui = config.resolved_ui();

    // Format priority: --json > --format > config file > table
    let format = if cli.json {
        OutputFormat::Json
    } else if let Some(format) = cli.format {
        format
    } else if ui.format.eq_ignore_ascii_case("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    let color = !cli.no_color && ui.color;

    let events = SessionEvents::new()
        .on_login(|identity| {
            println!(
                "{} Signed in as {} ({})",
                "✓".green(),
                identity.username.bold(),
                identity.role.label()
            );
        })
        .on_logout(|| println!("Signed out."))
        .on_session_expired(|| {
            eprintln!("{}", "Session expired. Please sign in again.".yellow());
        });

    let storage = Arc::new(FileSessionStorage::new()?);
    let session = Arc::new(SessionStore::with_events(storage, events));
    session.hydrate();

    let connection = config.resolved_connection();
    let timeout = cli.timeout.unwrap_or(connection.timeout_secs);
    let connect_timeout = cli
        .connection_timeout
        .unwrap_or(connection.connect_timeout_secs);

    // URL priority: --url > config file > default
    let url = cli
        .url
        .clone()
        .or_else(|| config.resolved_server().url)
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

    let client = RemoteHubClient::builder()
        .base_url(url)
        .session(session.clone())
        .timeout(Duration::from_secs(timeout))
        .connect_timeout(Duration::from_secs(connect_timeout))
        .build()?;

    Ok(AppContext {
        client,
        session,
        formatter: OutputFormatter::new(format, color),
    })
}
