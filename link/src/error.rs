//! Error types for remotehub-link
//!
//! Every fallible operation in this crate returns [`RemoteHubError`]. Server
//! rejections keep the backend's own message text so callers can show it
//! verbatim; transport failures carry the underlying description instead.

use thiserror::Error;

/// Result type for link operations
pub type Result<T> = std::result::Result<T, RemoteHubError>;

/// Errors that can occur while talking to a RemoteHub server
#[derive(Debug, Error)]
pub enum RemoteHubError {
    /// The server could not be reached (DNS failure, refused connection,
    /// dropped socket)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    TimeoutError(String),

    /// The server rejected the credentials or the session token (HTTP 401)
    #[error("{0}")]
    AuthenticationError(String),

    /// The server answered with a non-success status code
    #[error("{message}")]
    ServerError { status_code: u16, message: String },

    /// A response body could not be decoded
    #[error("Malformed response: {0}")]
    SerializationError(String),

    /// The client was built or called with invalid settings
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The persisted session could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl RemoteHubError {
    /// HTTP status attached to this error, when one exists.
    ///
    /// Transport-level failures (network, timeout, decode) carry no status.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            RemoteHubError::AuthenticationError(_) => Some(401),
            RemoteHubError::ServerError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// True when the server rejected the session token (HTTP 401)
    pub fn is_unauthorized(&self) -> bool {
        self.http_status() == Some(401)
    }

    /// Build the error for a non-success HTTP response.
    ///
    /// 401 responses become [`RemoteHubError::AuthenticationError`] so the
    /// session layer can tell an invalid token apart from other failures.
    pub(crate) fn server(status_code: u16, message: String) -> Self {
        if status_code == 401 {
            RemoteHubError::AuthenticationError(message)
        } else {
            RemoteHubError::ServerError {
                status_code,
                message,
            }
        }
    }
}

impl From<reqwest::Error> for RemoteHubError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RemoteHubError::TimeoutError(err.to_string())
        } else if err.is_decode() {
            RemoteHubError::SerializationError(err.to_string())
        } else {
            RemoteHubError::NetworkError(err.to_string())
        }
    }
}
