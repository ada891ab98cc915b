use serde::{Deserialize, Serialize};

/// Account registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Desired login name
    pub username: String,
    /// Contact email address
    pub email: String,
    /// Plaintext password; hashed server-side
    pub password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}
