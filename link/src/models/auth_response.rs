use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::role::Role;

/// Response returned by the sign-in and registration endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT bearer token for subsequent API calls
    #[serde(default)]
    pub token: Option<String>,
    /// Login name of the account
    pub username: String,
    /// Contact email address
    #[serde(default)]
    pub email: Option<String>,
    /// Access role assigned to the account
    #[serde(default)]
    pub role: Option<Role>,
    /// Status text such as "Login successful"
    #[serde(default)]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Build the identity snapshot this response describes.
    ///
    /// Responses that omit the role fall back to [`Role::Member`].
    pub fn into_identity(self) -> Identity {
        Identity {
            id: None,
            username: self.username,
            email: self.email,
            first_name: None,
            last_name: None,
            role: self.role.unwrap_or(Role::Member),
            is_active: true,
        }
    }
}
