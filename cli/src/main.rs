//! hub - Terminal client for RemoteHub
//!
//! # Usage
//!
//! ```bash
//! # Sign in and look around
//! hub login amira
//! hub dashboard
//!
//! # Task management
//! hub tasks create "Rotate signing keys" --team 3 --priority high
//! hub tasks complete 17
//!
//! # JSON output for scripting
//! hub --json teams list
//! ```

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use remotehub_cli::{CLIConfiguration, Result};

mod args;
mod commands;
mod connect;

use args::{Cli, Command};
use connect::create_context;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = CLIConfiguration::load(&cli.config)?;
    let context = create_context(&cli, &config)?;

    match cli.command {
        Command::Login { username, password } => {
            commands::auth::login(&context, username, password).await
        }
        Command::Logout => commands::auth::logout(&context),
        Command::Whoami => commands::auth::whoami(&context).await,
        Command::Register => commands::auth::register(&context).await,
        Command::ForgotPassword { email } => {
            commands::auth::forgot_password(&context, &email).await
        }
        Command::ResetPassword { token, password } => {
            commands::auth::reset_password(&context, &token, password).await
        }
        Command::Dashboard => commands::dashboard::show(&context).await,
        Command::Teams { command } => commands::teams::handle(&context, command).await,
        Command::Tasks { command } => commands::tasks::handle(&context, command).await,
        Command::Users { command } => commands::users::handle(&context, command).await,
        Command::Admin { command } => commands::admin::handle(&context, command).await,
    }
}

/// Install the tracing subscriber and the `log` bridge.
///
/// `--verbose` forces debug-level output; otherwise `RUST_LOG` applies,
/// with a quiet default.
fn init_logging(verbose: bool) {
    // Bridge `log` records (the client library logs through `log`) into tracing
    tracing_log::LogTracer::init().ok();

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
