//! Role-based access decisions.
//!
//! [`evaluate`] turns a session snapshot plus an optional role
//! requirement into the single action a caller should take. It reads
//! nothing but its arguments, so front ends can gate any screen with it
//! without touching the store or the network.

use crate::models::Role;
use crate::session::Session;

/// What to do with a guarded screen or resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessDecision {
    /// Hydration has not finished; show nothing yet.
    Loading,
    /// Nobody is signed in; send the caller to the sign-in screen.
    RedirectToLogin,
    /// Signed in, but the account's role does not meet the requirement;
    /// send the caller to their default screen.
    RedirectToDefault,
    /// The caller may see the guarded content.
    Render,
}

impl AccessDecision {
    /// True when the guarded content should be shown.
    pub fn is_render(&self) -> bool {
        matches!(self, AccessDecision::Render)
    }
}

/// Decide whether a session may access content guarded by `required`.
///
/// Checks run in a fixed order: an unfinished hydration wins over
/// everything, a missing token wins over role checks, and the role check
/// only runs when a requirement is present. `None` means any signed-in
/// account qualifies.
pub fn evaluate(session: &Session, required: Option<Role>) -> AccessDecision {
    if session.loading {
        return AccessDecision::Loading;
    }
    if session.token.is_none() {
        return AccessDecision::RedirectToLogin;
    }
    match required {
        Some(required) if session.role() != Some(required) => AccessDecision::RedirectToDefault,
        _ => AccessDecision::Render,
    }
}
