//! Administrator-only endpoints.

use serde::Serialize;

use crate::client::RemoteHubClient;
use crate::error::Result;
use crate::models::{Identity, Team};

/// Body for the admin add-member endpoint, which takes the user id in
/// JSON rather than in the path.
#[derive(Debug, Serialize)]
struct UserRef {
    id: i64,
}

/// Handle for the `/admin` endpoints. Every call requires the
/// administrator role; others receive a server error.
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a RemoteHubClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(client: &'a RemoteHubClient) -> Self {
        Self { client }
    }

    /// List every user, including inactive accounts.
    pub async fn list_users(&self) -> Result<Vec<Identity>> {
        self.client.get("/admin/users").await
    }

    /// Permanently delete a user account.
    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.client
            .delete_unit(&format!("/admin/users/{}", user_id))
            .await
    }

    /// Add a user to a team on their behalf and return the updated team.
    pub async fn add_team_member(&self, team_id: i64, user_id: i64) -> Result<Team> {
        self.client
            .post(
                &format!("/admin/teams/{}/members", team_id),
                &UserRef { id: user_id },
            )
            .await
    }
}
