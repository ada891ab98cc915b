//! Main RemoteHub client with builder pattern.
//!
//! Provides the primary interface for talking to a RemoteHub server. The
//! client owns no session state itself: it is built around an injected
//! [`SessionStore`] and routes every request through an injected
//! [`RequestPipeline`].

use crate::{
    api::{AdminApi, AuthApi, TasksApi, TeamsApi, UsersApi},
    error::{RemoteHubError, Result},
    models::{DashboardStats, Identity, LoginRequest},
    pipeline::RequestPipeline,
    session::SessionStore,
};
use log::{debug, warn};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

/// Main RemoteHub client.
///
/// Use [`RemoteHubClientBuilder`] to construct instances; both the base URL
/// and the session store are required.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use remotehub_link::{MemorySessionStorage, RemoteHubClient, SessionStore};
///
/// # async fn example() -> remotehub_link::Result<()> {
/// let session = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
/// session.hydrate();
///
/// let client = RemoteHubClient::builder()
///     .base_url("http://localhost:8085/api/v1")
///     .session(session)
///     .build()?;
///
/// let identity = client.login("amira", "secret123").await?;
/// println!("Signed in as {}", identity.username);
///
/// let teams = client.teams().list().await?;
/// println!("{} teams", teams.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RemoteHubClient {
    base_url: String,
    http_client: reqwest::Client,
    session: Arc<SessionStore>,
    pipeline: Arc<RequestPipeline>,
}

impl RemoteHubClient {
    /// Create a new builder for configuring the client
    pub fn builder() -> RemoteHubClientBuilder {
        RemoteHubClientBuilder::new()
    }

    /// The session store this client was built around
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Authentication endpoints (sign-in, registration, password reset)
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Team endpoints
    pub fn teams(&self) -> TeamsApi<'_> {
        TeamsApi::new(self)
    }

    /// Task endpoints
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi::new(self)
    }

    /// User and profile endpoints
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Administration endpoints
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    /// Sign in and establish the session in one call.
    ///
    /// On success the session store is updated (and the record persisted)
    /// before this returns, so the very next request already goes out with
    /// the fresh token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Identity> {
        debug!("[LINK_AUTH] Signing in user '{}'", username);
        let response = self
            .auth()
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        let token = response.token.clone().ok_or_else(|| {
            RemoteHubError::SerializationError(
                "sign-in response carried no token".to_string(),
            )
        })?;
        let identity = response.into_identity();
        self.session.login(identity.clone(), token)?;
        Ok(identity)
    }

    /// End the session.
    ///
    /// Sign-out is purely local: the server holds no session state, so this
    /// clears the store and its persisted record without a network call.
    pub fn logout(&self) {
        self.session.logout();
    }

    /// Load the four dashboard counters in parallel.
    ///
    /// The counts are independent, so they are fetched concurrently; the
    /// first failure cancels the remaining requests and becomes the overall
    /// error. No partial result is ever returned.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        debug!("[LINK_HTTP] Loading dashboard counters");
        let teams = self.teams();
        let tasks = self.tasks();
        let users = self.users();

        let (active_teams, pending_tasks, completed_today, total_members) = tokio::try_join!(
            teams.count(),
            tasks.pending_count(),
            tasks.completed_today_count(),
            users.count(),
        )?;

        Ok(DashboardStats {
            active_teams,
            pending_tasks,
            completed_today,
            total_members,
        })
    }

    // ---------------------------------------------------------------
    // Request helpers used by the per-resource endpoint handles
    // ---------------------------------------------------------------

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch::<()>(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch::<()>(Method::POST, path, None).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_empty<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.dispatch::<()>(Method::PUT, path, None).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        self.dispatch::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Send one request through the pipeline.
    ///
    /// Request steps run before the exchange, response steps after; the
    /// outcome the caller sees is whatever the last response step produced.
    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = self.pipeline.prepare(request).await?;

        debug!("[LINK_HTTP] Sending {} to {}", method, url);
        let start = Instant::now();
        let outcome = request.send().await;
        let result = self.pipeline.complete(outcome).await;

        match &result {
            Ok(response) => debug!(
                "[LINK_HTTP] Response received: status={} duration_ms={}",
                response.status(),
                start.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "[LINK_HTTP] Request failed: {} duration_ms={}",
                err,
                start.elapsed().as_millis()
            ),
        }
        result
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        response.json::<T>().await.map_err(|e| {
            warn!("[LINK_HTTP] Failed to decode response body: {}", e);
            RemoteHubError::from(e)
        })
    }
}

/// Builder for configuring [`RemoteHubClient`] instances.
pub struct RemoteHubClientBuilder {
    base_url: Option<String>,
    session: Option<Arc<SessionStore>>,
    pipeline: Option<Arc<RequestPipeline>>,
    timeout: Duration,
    connect_timeout: Duration,
}

impl RemoteHubClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            session: None,
            pipeline: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Set the base URL including the API prefix
    /// (e.g. `http://localhost:8085/api/v1`)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the session store the client reads tokens from and reports
    /// rejected sessions to. Required.
    pub fn session(mut self, session: Arc<SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Replace the standard request pipeline.
    ///
    /// The default is [`RequestPipeline::standard`] wired to the session
    /// store. Supplying a custom pipeline is mostly useful in tests.
    pub fn pipeline(mut self, pipeline: Arc<RequestPipeline>) -> Self {
        self.pipeline = Some(pipeline);
        self
    }

    /// Set the end-to-end request timeout (default: 30 seconds)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the TCP connect timeout (default: 10 seconds)
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RemoteHubClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| RemoteHubError::ConfigurationError("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let session = self.session.ok_or_else(|| {
            RemoteHubError::ConfigurationError("session store is required".into())
        })?;

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| RemoteHubError::ConfigurationError(e.to_string()))?;

        let pipeline = self
            .pipeline
            .unwrap_or_else(|| Arc::new(RequestPipeline::standard(session.clone())));

        Ok(RemoteHubClient {
            base_url,
            http_client,
            session,
            pipeline,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStorage;

    fn store() -> Arc<SessionStore> {
        Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())))
    }

    #[test]
    fn test_builder_pattern() {
        let result = RemoteHubClient::builder()
            .base_url("http://localhost:8085/api/v1")
            .session(store())
            .timeout(Duration::from_secs(10))
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_missing_url() {
        let result = RemoteHubClient::builder().session(store()).build();
        assert!(matches!(
            result.unwrap_err(),
            RemoteHubError::ConfigurationError(_)
        ));
    }

    #[test]
    fn test_builder_missing_session() {
        let result = RemoteHubClient::builder()
            .base_url("http://localhost:8085/api/v1")
            .build();
        assert!(matches!(
            result.unwrap_err(),
            RemoteHubError::ConfigurationError(_)
        ));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = RemoteHubClient::builder()
            .base_url("http://localhost:8085/api/v1/")
            .session(store())
            .build()
            .unwrap();

        assert_eq!(client.base_url, "http://localhost:8085/api/v1");
    }
}
