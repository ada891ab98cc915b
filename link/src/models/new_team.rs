use serde::{Deserialize, Serialize};

/// Request body for creating or updating a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    /// Unique team name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
