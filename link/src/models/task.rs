use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::task_priority::TaskPriority;
use super::task_status::TaskStatus;
use super::team::Team;

/// A unit of work tracked on a team board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Database identifier
    pub id: i64,
    /// Short title shown in lists
    pub title: String,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle state
    pub status: TaskStatus,
    /// Scheduling priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// True once the task reached DONE or CERTIFIED
    #[serde(default)]
    pub completed: bool,
    /// Team the task belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    /// Account the task is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Identity>,
    /// Account that certified the finished work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified_by: Option<Identity>,
    /// Due date in the server's local date-time format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// Set when the task was marked done
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
