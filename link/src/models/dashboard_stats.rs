use serde::{Deserialize, Serialize};

/// Aggregated counters shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of teams
    pub active_teams: i64,
    /// Tasks still waiting to be started
    pub pending_tasks: i64,
    /// Tasks completed in the last 24 hours
    pub completed_today: i64,
    /// Registered accounts
    pub total_members: i64,
}
