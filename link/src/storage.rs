//! Session persistence for RemoteHub clients.
//!
//! A trait-based abstraction over where the signed-in session lives between
//! runs: a dotfile for terminal tools, memory for tests and one-shot
//! scripts. The session store treats storage as authoritative during
//! sign-in and as best-effort during sign-out.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::Identity;

/// Snapshot of a signed-in session as written to persistent storage.
///
/// The identity is stored under the `user` key, matching the record shape
/// the other RemoteHub clients persist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedSession {
    /// JWT bearer token
    pub token: String,
    /// Identity snapshot captured at sign-in
    #[serde(rename = "user")]
    pub identity: Identity,
}

/// Trait for session storage backends.
///
/// Implementations can keep the session in a file, a keychain, or plain
/// memory. All methods take `&self`; implementations handle their own
/// locking so one backend can be shared between the client and its request
/// pipeline.
///
/// # Security Note
///
/// The persisted record contains a live bearer token. File-backed
/// implementations should use restrictive permissions (0600 on Unix) and
/// must never log the token.
pub trait SessionStorage: Send + Sync + fmt::Debug {
    /// Read the persisted session, if any.
    ///
    /// Returns `Ok(None)` when nothing is stored. A corrupt or unreadable
    /// record is an error; the session store recovers from it by starting
    /// signed out.
    fn load(&self) -> Result<Option<PersistedSession>>;

    /// Write the session, replacing any previous record.
    fn save(&self, session: &PersistedSession) -> Result<()>;

    /// Delete the stored session.
    ///
    /// Returns `Ok(())` even when nothing was stored.
    fn clear(&self) -> Result<()>;

    /// Check whether a session record exists.
    ///
    /// Default implementation calls [`SessionStorage::load`] and checks
    /// for `Some`.
    fn has_session(&self) -> Result<bool> {
        Ok(self.load()?.is_some())
    }
}

/// In-memory session storage for tests and short-lived tools.
///
/// Does NOT persist across restarts.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    session: Mutex<Option<PersistedSession>>,
}

impl MemorySessionStorage {
    /// Create a new empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-loaded with a session record
    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>> {
        Ok(self.session.lock().clone())
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        *self.session.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock() = None;
        Ok(())
    }
}
