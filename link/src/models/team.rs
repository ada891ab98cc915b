use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::task::Task;

/// A team with its members and tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Database identifier
    pub id: i64,
    /// Unique team name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Manager responsible for the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Identity>,
    /// Accounts belonging to the team
    #[serde(default)]
    pub members: Vec<Identity>,
    /// Tasks owned by the team
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Creation timestamp as the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
