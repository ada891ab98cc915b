//! Composable request pipeline for the RemoteHub client.
//!
//! Every request the client sends flows through one [`RequestPipeline`]:
//! request steps run in order before the exchange, response steps run in
//! order on whatever comes back. The pipeline is built once at client
//! construction and injected, so tests can swap steps in and out without
//! touching the client.
//!
//! The standard arrangement is [`AttachToken`] on the way out, then
//! [`NormalizeError`] followed by [`DetectUnauthorized`] on the way back.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{RemoteHubError, Result};
use crate::session::SessionStore;

pub mod steps;

pub use steps::{AttachToken, DetectUnauthorized, NormalizeError};

/// Outcome flowing between response steps: a usable response, or the error
/// an earlier stage produced.
pub type ExchangeResult = Result<reqwest::Response>;

/// A step that runs before the request is sent.
#[async_trait]
pub trait RequestStep: Send + Sync {
    /// Name used in logs and pipeline debug output
    fn name(&self) -> &'static str;

    /// Transform the outgoing request
    async fn apply(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder>;
}

/// A step that runs on the exchange outcome after the request was sent.
#[async_trait]
pub trait ResponseStep: Send + Sync {
    /// Name used in logs and pipeline debug output
    fn name(&self) -> &'static str;

    /// Transform the exchange outcome
    async fn apply(&self, outcome: ExchangeResult) -> ExchangeResult;
}

/// Ordered set of request and response steps.
pub struct RequestPipeline {
    request_steps: Vec<Arc<dyn RequestStep>>,
    response_steps: Vec<Arc<dyn ResponseStep>>,
}

impl RequestPipeline {
    /// Create a pipeline with no steps. Mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            request_steps: Vec::new(),
            response_steps: Vec::new(),
        }
    }

    /// The standard arrangement every RemoteHub client uses.
    ///
    /// Order matters on the response side: errors are normalized first so
    /// [`DetectUnauthorized`] can match on the typed 401 instead of raw
    /// status codes.
    pub fn standard(session: Arc<SessionStore>) -> Self {
        Self::empty()
            .with_request_step(Arc::new(AttachToken::new(session.clone())))
            .with_response_step(Arc::new(NormalizeError))
            .with_response_step(Arc::new(DetectUnauthorized::new(session)))
    }

    /// Append a request step
    pub fn with_request_step(mut self, step: Arc<dyn RequestStep>) -> Self {
        self.request_steps.push(step);
        self
    }

    /// Append a response step
    pub fn with_response_step(mut self, step: Arc<dyn ResponseStep>) -> Self {
        self.response_steps.push(step);
        self
    }

    /// Run every request step in order over the outgoing request.
    pub async fn prepare(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        for step in &self.request_steps {
            request = step.apply(request).await?;
        }
        Ok(request)
    }

    /// Run every response step in order over the exchange outcome.
    ///
    /// Transport errors from the send itself are folded into
    /// [`RemoteHubError`] before the first step sees them.
    pub async fn complete(
        &self,
        outcome: std::result::Result<reqwest::Response, reqwest::Error>,
    ) -> ExchangeResult {
        let mut outcome = outcome.map_err(RemoteHubError::from);
        for step in &self.response_steps {
            outcome = step.apply(outcome).await;
        }
        outcome
    }
}

impl fmt::Debug for RequestPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request_steps: Vec<&str> = self.request_steps.iter().map(|s| s.name()).collect();
        let response_steps: Vec<&str> = self.response_steps.iter().map(|s| s.name()).collect();
        f.debug_struct("RequestPipeline")
            .field("request_steps", &request_steps)
            .field("response_steps", &response_steps)
            .finish()
    }
}
