use serde::{Deserialize, Serialize};

use super::role::Role;

/// Account identity as the server reports it.
///
/// Sign-in responses only carry `username`, `email`, and `role`; the user
/// endpoints fill in the rest. Fields the server omits deserialize to `None`
/// instead of failing, so the same type covers both payload shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Database identifier; absent in sign-in payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique login name
    pub username: String,
    /// Contact email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Access role
    pub role: Role,
    /// False once an administrator deactivates the account
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Identity {
    /// Full name when the profile carries one, otherwise the username.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }
}
