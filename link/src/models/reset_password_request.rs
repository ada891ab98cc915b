use serde::{Deserialize, Serialize};

/// Request body for completing a password reset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    /// One-time token from the reset email
    pub token: String,
    /// Replacement password
    pub new_password: String,
}
