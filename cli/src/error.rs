//! Error types for the hub terminal client.
//!
//! Keeps terminal output friendly: link-level failures are unwrapped to
//! the message a user should read, without the library's own prefixes.

use remotehub_link::RemoteHubError;
use std::fmt;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CLIError>;

/// Errors that can occur in the CLI
#[derive(Debug)]
pub enum CLIError {
    /// Error from the remotehub-link library
    LinkError(RemoteHubError),

    /// Configuration file error
    ConfigurationError(String),

    /// File I/O error
    FileError(String),

    /// Invalid user input (bad flag value, rejected form field)
    InputError(String),

    /// Output formatting error
    FormatError(String),

    /// Command needs a signed-in session and none is present
    NotSignedIn,

    /// Signed in, but the account's role does not allow the command
    PermissionDenied(String),

    /// User cancelled operation
    Cancelled,
}

impl CLIError {
    fn format_link_error(err: &RemoteHubError) -> String {
        match err {
            RemoteHubError::NetworkError(msg) => Self::clean_nested_message(msg),
            RemoteHubError::TimeoutError(msg) => msg.clone(),
            RemoteHubError::AuthenticationError(msg) => msg.clone(),
            RemoteHubError::SerializationError(msg) => msg.clone(),
            RemoteHubError::ConfigurationError(msg) => msg.clone(),
            RemoteHubError::StorageError(msg) => msg.clone(),
            // The normalized message is already the text a user should see.
            RemoteHubError::ServerError { message, .. } => message.clone(),
        }
    }

    fn clean_nested_message(message: &str) -> String {
        let mut cleaned = message.trim();
        let prefixes = [
            "Connection failed:",
            "connection failed:",
            "Network error:",
            "network error:",
        ];

        loop {
            let mut stripped = false;
            for prefix in &prefixes {
                if let Some(rest) = cleaned.strip_prefix(prefix) {
                    cleaned = rest.trim_start();
                    stripped = true;
                    break;
                }
            }

            if !stripped {
                break;
            }
        }

        cleaned.to_string()
    }
}

impl fmt::Display for CLIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CLIError::LinkError(e) => write!(f, "{}", Self::format_link_error(e)),
            CLIError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            CLIError::FileError(msg) => write!(f, "File error: {}", msg),
            CLIError::InputError(msg) => write!(f, "{}", msg),
            CLIError::FormatError(msg) => write!(f, "Format error: {}", msg),
            CLIError::NotSignedIn => write!(f, "Not signed in. Run 'hub login' first."),
            CLIError::PermissionDenied(role) => {
                write!(f, "This command requires the {} role.", role)
            }
            CLIError::Cancelled => write!(f, "Operation cancelled"),
        }
    }
}

impl std::error::Error for CLIError {}

impl From<RemoteHubError> for CLIError {
    fn from(err: RemoteHubError) -> Self {
        CLIError::LinkError(err)
    }
}

impl From<std::io::Error> for CLIError {
    fn from(err: std::io::Error) -> Self {
        CLIError::FileError(err.to_string())
    }
}

impl From<toml::de::Error> for CLIError {
    fn from(err: toml::de::Error) -> Self {
        CLIError::ConfigurationError(format!("TOML parse error: {}", err))
    }
}
