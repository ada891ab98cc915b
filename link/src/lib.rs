//! # remotehub-link: RemoteHub Client Library
//!
//! A client library for the RemoteHub collaboration server. Wraps the
//! HTTP API behind typed resource handles and keeps the signed-in
//! session in one injectable store.
//!
//! ## Features
//!
//! - **Typed API**: Per-resource handles for teams, tasks, users, and admin calls
//! - **Session Store**: One owner for the token and identity, restored from pluggable storage
//! - **Request Pipeline**: Composable steps attach the token, normalize errors, and detect expiry
//! - **Access Gate**: Pure role-based decisions for guarding screens
//! - **Uniform Errors**: Every failure becomes one error type with a single display message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use remotehub_link::{MemorySessionStorage, RemoteHubClient, SessionStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Restore any persisted session before the first request.
//!     let session = Arc::new(SessionStore::new(Arc::new(MemorySessionStorage::new())));
//!     session.hydrate();
//!
//!     let client = RemoteHubClient::builder()
//!         .base_url("http://localhost:8085/api/v1")
//!         .session(session)
//!         .build()?;
//!
//!     // Sign in; the token is persisted and attached to every later request.
//!     let identity = client.login("casey", "secret").await?;
//!     println!("Signed in as {}", identity.username);
//!
//!     let teams = client.teams().list().await?;
//!     println!("{} teams", teams.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Session Events
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use remotehub_link::{MemorySessionStorage, SessionEvents, SessionStore};
//!
//! let events = SessionEvents::new()
//!     .on_session_expired(|| println!("Session expired. Please sign in again."));
//! let session = SessionStore::with_events(Arc::new(MemorySessionStorage::new()), events);
//! session.hydrate();
//! ```

pub mod access;
pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod storage;

// Re-export main types for convenience
pub use access::AccessDecision;
pub use api::{AdminApi, AuthApi, TasksApi, TeamsApi, UsersApi};
pub use client::{RemoteHubClient, RemoteHubClientBuilder};
pub use error::{RemoteHubError, Result};
pub use models::{
    AuthResponse, DashboardStats, Identity, LoginRequest, MessageResponse, NewTask, NewTeam,
    ProfileUpdate, RegisterRequest, Role, Task, TaskPriority, TaskStatus, Team,
};
pub use pipeline::{
    AttachToken, DetectUnauthorized, NormalizeError, RequestPipeline, RequestStep, ResponseStep,
};
pub use session::events::SessionEvents;
pub use session::{Session, SessionState, SessionStore};
pub use storage::{MemorySessionStorage, PersistedSession, SessionStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
