//! Task endpoints.

use crate::client::RemoteHubClient;
use crate::error::Result;
use crate::models::{NewTask, Task};

/// Handle for the `/tasks` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TasksApi<'a> {
    client: &'a RemoteHubClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a RemoteHubClient) -> Self {
        Self { client }
    }

    /// List tasks, newest first. `limit` caps the result server-side.
    pub async fn list(&self, limit: Option<u32>) -> Result<Vec<Task>> {
        let path = match limit {
            Some(limit) => format!("/tasks?limit={}", limit),
            None => "/tasks".to_string(),
        };
        self.client.get(&path).await
    }

    /// Fetch one task.
    pub async fn get(&self, task_id: i64) -> Result<Task> {
        self.client.get(&format!("/tasks/{}", task_id)).await
    }

    /// Create a task inside a team.
    pub async fn create(&self, team_id: i64, task: &NewTask) -> Result<Task> {
        self.client
            .post(&format!("/tasks?teamId={}", team_id), task)
            .await
    }

    /// Replace a task's editable fields.
    pub async fn update(&self, task_id: i64, task: &NewTask) -> Result<Task> {
        self.client.put(&format!("/tasks/{}", task_id), task).await
    }

    /// Delete a task.
    pub async fn delete(&self, task_id: i64) -> Result<()> {
        self.client.delete_unit(&format!("/tasks/{}", task_id)).await
    }

    /// Every task belonging to a team.
    pub async fn list_by_team(&self, team_id: i64) -> Result<Vec<Task>> {
        self.client.get(&format!("/tasks/team/{}", team_id)).await
    }

    /// Uncompleted tasks belonging to a team.
    pub async fn list_active_by_team(&self, team_id: i64) -> Result<Vec<Task>> {
        self.client
            .get(&format!("/tasks/active/team/{}", team_id))
            .await
    }

    /// Uncompleted tasks assigned to a user.
    pub async fn list_active_by_user(&self, user_id: i64) -> Result<Vec<Task>> {
        self.client
            .get(&format!("/tasks/active/user/{}", user_id))
            .await
    }

    /// Assign a task to a user and return the updated task.
    pub async fn assign(&self, task_id: i64, user_id: i64) -> Result<Task> {
        self.client
            .put_empty(&format!("/tasks/{}/assign/{}", task_id, user_id))
            .await
    }

    /// Mark a task completed and return the updated task.
    pub async fn complete(&self, task_id: i64) -> Result<Task> {
        self.client
            .put_empty(&format!("/tasks/{}/complete", task_id))
            .await
    }

    /// Certify a completed task and return the updated task.
    ///
    /// Certification is restricted server-side to administrators, managers,
    /// and team leads.
    pub async fn certify(&self, task_id: i64) -> Result<Task> {
        self.client
            .put_empty(&format!("/tasks/{}/certify", task_id))
            .await
    }

    /// Number of tasks not yet completed, as a bare count.
    pub async fn pending_count(&self) -> Result<i64> {
        self.client.get("/tasks/pending/count").await
    }

    /// Number of tasks completed since midnight, as a bare count.
    pub async fn completed_today_count(&self) -> Result<i64> {
        self.client.get("/tasks/completed-today/count").await
    }
}
