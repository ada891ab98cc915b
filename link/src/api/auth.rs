//! Authentication endpoints.

use crate::client::RemoteHubClient;
use crate::error::Result;
use crate::models::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest,
};

/// Handle for the `/auth` endpoints.
///
/// These are the only endpoints that work without a signed-in session.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a RemoteHubClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a RemoteHubClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token.
    ///
    /// This is the raw endpoint call; [`RemoteHubClient::login`] wraps it
    /// and also establishes the session.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.client.post("/auth/login", request).await
    }

    /// Create a new account. New accounts start with the member role.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.client.post("/auth/register", request).await
    }

    /// Request a password reset link for `email`.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.client.post("/auth/forgot-password", &request).await
    }

    /// Complete a password reset using the token from the reset email.
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageResponse> {
        let request = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        self.client.post("/auth/reset-password", &request).await
    }
}
