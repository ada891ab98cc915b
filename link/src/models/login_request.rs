use serde::{Deserialize, Serialize};

/// Sign-in request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name of the account
    pub username: String,
    /// Plaintext password; verified server-side
    pub password: String,
}
