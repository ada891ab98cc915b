//! User endpoints.

use crate::client::RemoteHubClient;
use crate::error::Result;
use crate::models::{Identity, ProfileUpdate};

/// Handle for the `/users` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a RemoteHubClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a RemoteHubClient) -> Self {
        Self { client }
    }

    /// List every user.
    pub async fn list(&self) -> Result<Vec<Identity>> {
        self.client.get("/users").await
    }

    /// Fetch one user.
    pub async fn get(&self, user_id: i64) -> Result<Identity> {
        self.client.get(&format!("/users/{}", user_id)).await
    }

    /// The profile behind the current token.
    pub async fn me(&self) -> Result<Identity> {
        self.client.get("/users/me").await
    }

    /// Update the current user's profile and return the stored version.
    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<Identity> {
        self.client.put("/users/me", update).await
    }

    /// Number of users, as a bare count.
    pub async fn count(&self) -> Result<i64> {
        self.client.get("/users/count").await
    }
}
