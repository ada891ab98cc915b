//! Team endpoints.

use crate::client::RemoteHubClient;
use crate::error::Result;
use crate::models::{NewTeam, Team};

/// Handle for the `/teams` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TeamsApi<'a> {
    client: &'a RemoteHubClient,
}

impl<'a> TeamsApi<'a> {
    pub(crate) fn new(client: &'a RemoteHubClient) -> Self {
        Self { client }
    }

    /// List every team.
    pub async fn list(&self) -> Result<Vec<Team>> {
        self.client.get("/teams").await
    }

    /// Fetch one team with its members and tasks.
    pub async fn get(&self, team_id: i64) -> Result<Team> {
        self.client.get(&format!("/teams/{}", team_id)).await
    }

    /// Create a team. Requires the administrator or manager role.
    pub async fn create(&self, team: &NewTeam) -> Result<Team> {
        self.client.post("/teams", team).await
    }

    /// Replace a team's name and description.
    pub async fn update(&self, team_id: i64, team: &NewTeam) -> Result<Team> {
        self.client.put(&format!("/teams/{}", team_id), team).await
    }

    /// Delete a team. Requires the administrator role.
    ///
    /// Deleting an already-deleted team surfaces the server's "Team not
    /// found" error; it is not treated as success.
    pub async fn delete(&self, team_id: i64) -> Result<()> {
        self.client.delete_unit(&format!("/teams/{}", team_id)).await
    }

    /// Add a user to a team and return the updated team.
    pub async fn add_member(&self, team_id: i64, user_id: i64) -> Result<Team> {
        self.client
            .post_empty(&format!("/teams/{}/add-member/{}", team_id, user_id))
            .await
    }

    /// Remove a user from a team.
    pub async fn remove_member(&self, team_id: i64, user_id: i64) -> Result<()> {
        self.client
            .delete_unit(&format!("/teams/{}/members/{}", team_id, user_id))
            .await
    }

    /// Number of teams, as a bare count.
    pub async fn count(&self) -> Result<i64> {
        self.client.get("/teams/count").await
    }
}
