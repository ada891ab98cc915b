use serde::{Deserialize, Serialize};

/// Request body for the password-reset-link endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Email address the reset link is sent to
    pub email: String,
}
