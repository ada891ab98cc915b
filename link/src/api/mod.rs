//! Typed per-resource endpoint handles.
//!
//! Each handle borrows the client and exposes the operations of one
//! backend resource. Handles are created on demand via
//! [`RemoteHubClient::teams`](crate::RemoteHubClient::teams) and friends;
//! they are plain borrows and free to copy.

pub mod admin;
pub mod auth;
pub mod tasks;
pub mod teams;
pub mod users;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use tasks::TasksApi;
pub use teams::TeamsApi;
pub use users::UsersApi;
