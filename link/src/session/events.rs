//! Session lifecycle event hooks.
//!
//! Host applications react to sign-in state changes through callbacks:
//!
//! - [`on_login`](SessionEvents::on_login): fired after a session is
//!   established and persisted
//! - [`on_logout`](SessionEvents::on_logout): fired whenever the session
//!   ends, for any reason
//! - [`on_session_expired`](SessionEvents::on_session_expired): fired when
//!   the server rejects the token (HTTP 401), before `on_logout`
//!
//! # Example
//!
//! ```rust
//! use remotehub_link::SessionEvents;
//!
//! let events = SessionEvents::new()
//!     .on_login(|identity| {
//!         println!("Signed in as {}", identity.username);
//!     })
//!     .on_session_expired(|| {
//!         eprintln!("Session expired. Please sign in again.");
//!     })
//!     .on_logout(|| {
//!         println!("Signed out.");
//!     });
//! # assert!(events.has_any());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::models::Identity;

/// Type alias for the on_login callback.
pub type OnLoginCallback = Arc<dyn Fn(&Identity) + Send + Sync>;

/// Type alias for the on_logout callback.
pub type OnLogoutCallback = Arc<dyn Fn() + Send + Sync>;

/// Type alias for the on_session_expired callback.
pub type OnSessionExpiredCallback = Arc<dyn Fn() + Send + Sync>;

/// Session lifecycle event hooks.
///
/// All hooks are optional. Callbacks are `Send + Sync` so the session store
/// can be shared across async tasks. Callbacks run synchronously on the
/// thread that changed the session, so they should return quickly.
#[derive(Clone, Default)]
pub struct SessionEvents {
    /// Called after a session is established and persisted.
    pub(crate) on_login: Option<OnLoginCallback>,

    /// Called whenever the session ends: explicit sign-out or a server
    /// rejection.
    pub(crate) on_logout: Option<OnLogoutCallback>,

    /// Called when the server rejects the token, before `on_logout` runs.
    pub(crate) on_session_expired: Option<OnSessionExpiredCallback>,
}

impl fmt::Debug for SessionEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEvents")
            .field("on_login", &self.on_login.is_some())
            .field("on_logout", &self.on_logout.is_some())
            .field("on_session_expired", &self.on_session_expired.is_some())
            .finish()
    }
}

impl SessionEvents {
    /// Create a new empty `SessionEvents` (no callbacks registered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked after a successful sign-in.
    ///
    /// The callback receives the identity the session was established for.
    pub fn on_login(mut self, f: impl Fn(&Identity) + Send + Sync + 'static) -> Self {
        self.on_login = Some(Arc::new(f));
        self
    }

    /// Register a callback invoked whenever the session ends.
    ///
    /// Fires for explicit sign-out and for server-forced sign-out alike, so
    /// it is the single place to route the user back to the sign-in screen.
    pub fn on_logout(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_logout = Some(Arc::new(f));
        self
    }

    /// Register a callback invoked when the server rejects the token.
    ///
    /// Runs before `on_logout`, so applications can explain *why* the
    /// session ended before reacting to the sign-out itself.
    pub fn on_session_expired(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Some(Arc::new(f));
        self
    }

    /// Returns `true` if any hook is registered.
    pub fn has_any(&self) -> bool {
        self.on_login.is_some() || self.on_logout.is_some() || self.on_session_expired.is_some()
    }

    // ---------------------------------------------------------------
    // Internal dispatch helpers
    // ---------------------------------------------------------------

    /// Dispatch the on_login event.
    pub(crate) fn emit_login(&self, identity: &Identity) {
        if let Some(cb) = &self.on_login {
            cb(identity);
        }
    }

    /// Dispatch the on_logout event.
    pub(crate) fn emit_logout(&self) {
        if let Some(cb) = &self.on_logout {
            cb();
        }
    }

    /// Dispatch the on_session_expired event.
    pub(crate) fn emit_session_expired(&self) {
        if let Some(cb) = &self.on_session_expired {
            cb();
        }
    }
}
