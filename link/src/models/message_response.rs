use serde::{Deserialize, Serialize};

/// Acknowledgement body carrying only a status message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable status text
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// The server's message, or `fallback` when the body had none.
    pub fn message_or(self, fallback: &str) -> String {
        match self.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => fallback.to_string(),
        }
    }
}
