//! The standard pipeline steps.

use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use super::{ExchangeResult, RequestStep, ResponseStep};
use crate::error::{RemoteHubError, Result};
use crate::session::SessionStore;

/// Adds the session's bearer token to outgoing requests.
///
/// Anonymous sessions pass through untouched, so public endpoints like
/// sign-in and registration share the same pipeline as protected ones.
#[derive(Debug)]
pub struct AttachToken {
    session: Arc<SessionStore>,
}

impl AttachToken {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl RequestStep for AttachToken {
    fn name(&self) -> &'static str {
        "attach-token"
    }

    async fn apply(&self, request: reqwest::RequestBuilder) -> Result<reqwest::RequestBuilder> {
        match self.session.token() {
            Some(token) => Ok(request.bearer_auth(token)),
            None => Ok(request),
        }
    }
}

/// Folds every non-success response into a [`RemoteHubError`].
///
/// Message priority: the server's own `message` field, then the raw body
/// text when it is not JSON, then a generic line naming the status code.
/// Successful responses and already-failed outcomes pass through untouched.
#[derive(Debug, Default)]
pub struct NormalizeError;

#[async_trait]
impl ResponseStep for NormalizeError {
    fn name(&self) -> &'static str {
        "normalize-error"
    }

    async fn apply(&self, outcome: ExchangeResult) -> ExchangeResult {
        let response = outcome?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = extract_message(status.as_u16(), &error_text);

        warn!(
            "[LINK_HTTP] Server error: status={} message=\"{}\"",
            status, message
        );
        Err(RemoteHubError::server(status.as_u16(), message))
    }
}

/// Pick the most useful human-readable message out of an error body.
///
/// JSON bodies surface their `message` field; JSON without one falls to the
/// generic line rather than leaking raw JSON into the UI. Plain-text bodies
/// are used as-is.
fn extract_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                let trimmed = message.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
        Err(_) => {
            let trimmed = body.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    format!("Request failed with status code {}", status)
}

/// Ends the session when the server answers 401.
///
/// The sign-out happens synchronously inside the step, so by the time the
/// caller sees the error the session is already anonymous and no further
/// request can go out with the dead token. The failed request is never
/// retried.
#[derive(Debug)]
pub struct DetectUnauthorized {
    session: Arc<SessionStore>,
}

impl DetectUnauthorized {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl ResponseStep for DetectUnauthorized {
    fn name(&self) -> &'static str {
        "detect-unauthorized"
    }

    async fn apply(&self, outcome: ExchangeResult) -> ExchangeResult {
        if let Err(err) = &outcome {
            if err.is_unauthorized() {
                debug!("[LINK_HTTP] 401 received, invalidating session");
                self.session.invalidate();
            }
        }
        outcome
    }
}
