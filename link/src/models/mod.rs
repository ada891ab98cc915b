//! Data models for the remotehub-link client library.
//!
//! Defines the request and response structures exchanged with the RemoteHub
//! REST API, one file per type.

pub mod auth_response;
pub mod dashboard_stats;
pub mod forgot_password_request;
pub mod identity;
pub mod login_request;
pub mod message_response;
pub mod new_task;
pub mod new_team;
pub mod profile_update;
pub mod register_request;
pub mod reset_password_request;
pub mod role;
pub mod task;
pub mod task_priority;
pub mod task_status;
pub mod team;


pub use auth_response::AuthResponse;
pub use dashboard_stats::DashboardStats;
pub use forgot_password_request::ForgotPasswordRequest;
pub use identity::Identity;
pub use login_request::LoginRequest;
pub use message_response::MessageResponse;
pub use new_task::NewTask;
pub use new_team::NewTeam;
pub use profile_update::ProfileUpdate;
pub use register_request::RegisterRequest;
pub use reset_password_request::ResetPasswordRequest;
pub use role::Role;
pub use task::Task;
pub use task_priority::TaskPriority;
pub use task_status::TaskStatus;
pub use team::Team;
