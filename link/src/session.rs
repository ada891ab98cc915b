//! Signed-in session state for RemoteHub clients.
//!
//! The [`SessionStore`] owns who is signed in, their bearer token, and
//! whether the persisted session has been read yet. It is the single
//! authority every other layer consults: the request pipeline reads the
//! token from it, and the access gate reads its snapshot.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use remotehub_link::{MemorySessionStorage, SessionState, SessionStore};
//!
//! let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
//! assert_eq!(store.state(), SessionState::Hydrating);
//!
//! store.hydrate();
//! assert_eq!(store.state(), SessionState::Anonymous);
//! ```

use log::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{RemoteHubError, Result};
use crate::models::{Identity, Role};
use crate::storage::{PersistedSession, SessionStorage};

pub mod events;

pub use events::SessionEvents;

/// Lifecycle phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The persisted session has not been read yet
    Hydrating,
    /// No token; protected surfaces should redirect to sign-in
    Anonymous,
    /// A token is present; requests go out authenticated
    Authenticated,
}

/// Point-in-time snapshot of the session.
///
/// `identity` and `token` are always set and cleared together: a token
/// without an identity (or the reverse) never occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Identity of the signed-in account, if any
    pub identity: Option<Identity>,
    /// Bearer token of the signed-in account, if any
    pub token: Option<String>,
    /// True until the first hydration pass completes
    pub loading: bool,
}

impl Session {
    /// Role of the signed-in account, if any
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// True when a token is present
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Lifecycle phase this snapshot is in
    pub fn state(&self) -> SessionState {
        if self.loading {
            SessionState::Hydrating
        } else if self.token.is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

impl Default for Session {
    /// The pre-hydration state: nobody signed in, persisted state unread.
    fn default() -> Self {
        Self {
            identity: None,
            token: None,
            loading: true,
        }
    }
}

/// Owns the signed-in state and keeps it in sync with persistent storage.
///
/// Construct one per application and share it via [`Arc`]: the HTTP client
/// takes a reference at build time instead of reaching for a global.
/// All methods are synchronous and safe to call from any thread.
#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn SessionStorage>,
    events: SessionEvents,
}

impl SessionStore {
    /// Create a store with no event hooks.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_events(storage, SessionEvents::new())
    }

    /// Create a store that fires the given hooks on session changes.
    pub fn with_events(storage: Arc<dyn SessionStorage>, events: SessionEvents) -> Self {
        Self {
            state: RwLock::new(Session::default()),
            storage,
            events,
        }
    }

    /// Restore the persisted session, if one exists.
    ///
    /// Runs once per store: later calls are no-ops. A missing record leaves
    /// the session anonymous; an unreadable record is discarded and the
    /// session starts anonymous as well. Either way `loading` is false
    /// afterwards, so callers can gate rendering on it.
    pub fn hydrate(&self) {
        {
            let state = self.state.read();
            if !state.loading {
                debug!("[LINK_SESSION] Already hydrated, skipping");
                return;
            }
        }

        let restored = match self.storage.load() {
            Ok(record) => record,
            Err(e) => {
                warn!("[LINK_SESSION] Discarding unreadable persisted session: {}", e);
                if let Err(e) = self.storage.clear() {
                    warn!("[LINK_SESSION] Failed to delete persisted session: {}", e);
                }
                None
            }
        };

        let mut state = self.state.write();
        if !state.loading {
            // another thread finished hydration first
            return;
        }
        match restored {
            Some(record) => {
                debug!(
                    "[LINK_SESSION] Restored session for '{}'",
                    record.identity.username
                );
                state.identity = Some(record.identity);
                state.token = Some(record.token);
            }
            None => {
                debug!("[LINK_SESSION] No persisted session, starting anonymous");
            }
        }
        state.loading = false;
    }

    /// Establish a session for `identity` with the given bearer token.
    ///
    /// The record is persisted before the in-memory state changes; if the
    /// write fails the store is left exactly as it was. An empty token is
    /// rejected up front since a session without a usable token could never
    /// make an authenticated request.
    pub fn login(&self, identity: Identity, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(RemoteHubError::ConfigurationError(
                "cannot establish a session with an empty token".to_string(),
            ));
        }

        let record = PersistedSession {
            token: token.clone(),
            identity: identity.clone(),
        };

        {
            let mut state = self.state.write();
            self.storage.save(&record)?;
            state.identity = Some(identity.clone());
            state.token = Some(token);
            state.loading = false;
        }

        info!("[LINK_SESSION] Signed in as '{}'", identity.username);
        self.events.emit_login(&identity);
        Ok(())
    }

    /// End the session.
    ///
    /// Never fails: the in-memory state is cleared first, and a failure to
    /// delete the persisted record is logged rather than surfaced. Fires
    /// `on_logout` unconditionally, even when nobody was signed in.
    pub fn logout(&self) {
        {
            let mut state = self.state.write();
            state.identity = None;
            state.token = None;
            state.loading = false;
        }

        if let Err(e) = self.storage.clear() {
            warn!("[LINK_SESSION] Failed to delete persisted session: {}", e);
        }

        debug!("[LINK_SESSION] Signed out");
        self.events.emit_logout();
    }

    /// End the session because the server rejected its token.
    ///
    /// Called by the request pipeline on HTTP 401. Clears state like
    /// [`SessionStore::logout`], then fires `on_session_expired` followed by
    /// `on_logout`. When nobody was signed in (a failed sign-in attempt also
    /// answers 401) this is silent: no events fire.
    pub fn invalidate(&self) {
        let had_session = {
            let mut state = self.state.write();
            let had = state.token.is_some();
            state.identity = None;
            state.token = None;
            state.loading = false;
            had
        };

        if let Err(e) = self.storage.clear() {
            warn!("[LINK_SESSION] Failed to delete persisted session: {}", e);
        }

        if had_session {
            warn!("[LINK_SESSION] Session rejected by the server, signing out");
            self.events.emit_session_expired();
            self.events.emit_logout();
        }
    }

    /// Replace the identity of the signed-in account.
    ///
    /// Used after profile edits so the persisted record tracks the server.
    /// Fails when nobody is signed in; the token is kept as-is.
    pub fn update_identity(&self, identity: Identity) -> Result<()> {
        let mut state = self.state.write();
        let token = state.token.clone().ok_or_else(|| {
            RemoteHubError::ConfigurationError(
                "cannot update the identity of an anonymous session".to_string(),
            )
        })?;

        let record = PersistedSession {
            token,
            identity: identity.clone(),
        };
        self.storage.save(&record)?;
        state.identity = Some(identity);
        Ok(())
    }

    /// Point-in-time copy of the session
    pub fn snapshot(&self) -> Session {
        self.state.read().clone()
    }

    /// Bearer token of the signed-in account, if any
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Identity of the signed-in account, if any
    pub fn identity(&self) -> Option<Identity> {
        self.state.read().identity.clone()
    }

    /// Role of the signed-in account, if any
    pub fn current_role(&self) -> Option<Role> {
        self.state.read().role()
    }

    /// True when a token is present
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Lifecycle phase the session is in
    pub fn state(&self) -> SessionState {
        self.state.read().state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySessionStorage;
    use parking_lot::Mutex;

    fn identity(username: &str, role: Role) -> Identity {
        Identity {
            id: None,
            username: username.to_string(),
            email: None,
            first_name: None,
            last_name: None,
            role,
            is_active: true,
        }
    }

    fn record(username: &str) -> PersistedSession {
        PersistedSession {
            token: "persisted-token".to_string(),
            identity: identity(username, Role::Member),
        }
    }

    /// Storage backend whose load always fails, as a corrupt file would.
    #[derive(Debug, Default)]
    struct CorruptStorage;

    impl SessionStorage for CorruptStorage {
        fn load(&self) -> Result<Option<PersistedSession>> {
            Err(RemoteHubError::StorageError("invalid record".to_string()))
        }

        fn save(&self, _session: &PersistedSession) -> Result<()> {
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            Ok(())
        }
    }

    /// Storage backend whose delete always fails.
    #[derive(Debug, Default)]
    struct StuckStorage;

    impl SessionStorage for StuckStorage {
        fn load(&self) -> Result<Option<PersistedSession>> {
            Ok(None)
        }

        fn save(&self, _session: &PersistedSession) -> Result<()> {
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            Err(RemoteHubError::StorageError("permission denied".to_string()))
        }
    }

    // ==================== Hydration Tests ====================

    #[test]
    fn test_store_starts_hydrating() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));

        assert_eq!(store.state(), SessionState::Hydrating);
        assert!(store.snapshot().loading);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_hydrate_with_empty_storage_goes_anonymous() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));

        store.hydrate();

        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(!store.snapshot().loading);
        assert!(store.token().is_none());
        assert!(store.identity().is_none());
    }

    #[test]
    fn test_hydrate_restores_persisted_session() {
        let backend = Arc::new(MemorySessionStorage::with_session(record("amira")));
        let store = SessionStore::new(backend);

        store.hydrate();

        assert_eq!(store.state(), SessionState::Authenticated);
        assert_eq!(store.token().as_deref(), Some("persisted-token"));
        assert_eq!(store.identity().unwrap().username, "amira");
        assert_eq!(store.current_role(), Some(Role::Member));
    }

    #[test]
    fn test_hydrate_runs_once() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));

        store.hydrate();
        store
            .login(identity("amira", Role::Admin), "fresh-token")
            .unwrap();

        // a second hydrate must not re-read storage over the live session
        store.hydrate();

        assert_eq!(store.state(), SessionState::Authenticated);
        assert_eq!(store.token().as_deref(), Some("fresh-token"));
    }

    #[test]
    fn test_hydrate_recovers_from_corrupt_storage() {
        let store = SessionStore::new(Arc::new(CorruptStorage));

        store.hydrate();

        assert_eq!(
            store.state(),
            SessionState::Anonymous,
            "corrupt storage should be treated as signed out"
        );
        assert!(!store.snapshot().loading);
    }

    // ==================== Login Tests ====================

    #[test]
    fn test_login_sets_token_and_identity_together() {
        let backend = Arc::new(MemorySessionStorage::new());
        let store = SessionStore::new(backend.clone());
        store.hydrate();

        store
            .login(identity("amira", Role::Manager), "jwt-token")
            .unwrap();

        let session = store.snapshot();
        assert!(session.token.is_some());
        assert!(session.identity.is_some());
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(store.current_role(), Some(Role::Manager));

        let persisted = backend.load().unwrap().expect("session should persist");
        assert_eq!(persisted.token, "jwt-token");
        assert_eq!(persisted.identity.username, "amira");
    }

    #[test]
    fn test_login_rejects_empty_token() {
        let backend = Arc::new(MemorySessionStorage::new());
        let store = SessionStore::new(backend.clone());
        store.hydrate();

        let err = store
            .login(identity("amira", Role::Member), "  ")
            .unwrap_err();

        assert!(matches!(err, RemoteHubError::ConfigurationError(_)));
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(
            backend.load().unwrap().is_none(),
            "nothing should be persisted for a rejected login"
        );
    }

    #[test]
    fn test_login_fires_on_login_hook() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_hook = seen.clone();
        let events = SessionEvents::new().on_login(move |identity| {
            seen_by_hook.lock().push(identity.username.clone());
        });

        let store = SessionStore::with_events(Arc::new(MemorySessionStorage::new()), events);
        store.hydrate();
        store
            .login(identity("amira", Role::Member), "jwt-token")
            .unwrap();

        assert_eq!(seen.lock().as_slice(), ["amira"]);
    }

    // ==================== Logout Tests ====================

    #[test]
    fn test_logout_clears_everything() {
        let backend = Arc::new(MemorySessionStorage::with_session(record("amira")));
        let store = SessionStore::new(backend.clone());
        store.hydrate();
        assert!(store.is_authenticated());

        store.logout();

        let session = store.snapshot();
        assert!(session.token.is_none());
        assert!(session.identity.is_none());
        assert_eq!(session.state(), SessionState::Anonymous);
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_logout_is_idempotent_and_always_fires_hook() {
        let count = Arc::new(Mutex::new(0u32));
        let count_by_hook = count.clone();
        let events = SessionEvents::new().on_logout(move || {
            *count_by_hook.lock() += 1;
        });

        let store = SessionStore::with_events(Arc::new(MemorySessionStorage::new()), events);
        store.hydrate();

        store.logout();
        store.logout();

        assert_eq!(*count.lock(), 2, "on_logout fires even when anonymous");
        assert_eq!(store.state(), SessionState::Anonymous);
    }

    #[test]
    fn test_logout_survives_storage_failure() {
        let events_fired = Arc::new(Mutex::new(false));
        let fired_by_hook = events_fired.clone();
        let events = SessionEvents::new().on_logout(move || {
            *fired_by_hook.lock() = true;
        });

        let store = SessionStore::with_events(Arc::new(StuckStorage), events);
        store.hydrate();
        store
            .login(identity("amira", Role::Member), "jwt-token")
            .unwrap();

        store.logout();

        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(*events_fired.lock(), "logout must complete despite storage errors");
    }

    // ==================== Invalidate Tests ====================

    #[test]
    fn test_invalidate_fires_expired_then_logout() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let order_for_expired = order.clone();
        let order_for_logout = order.clone();
        let events = SessionEvents::new()
            .on_session_expired(move || order_for_expired.lock().push("expired"))
            .on_logout(move || order_for_logout.lock().push("logout"));

        let backend = Arc::new(MemorySessionStorage::with_session(record("amira")));
        let store = SessionStore::with_events(backend.clone(), events);
        store.hydrate();

        store.invalidate();

        assert_eq!(order.lock().as_slice(), ["expired", "logout"]);
        assert_eq!(store.state(), SessionState::Anonymous);
        assert!(backend.load().unwrap().is_none());
    }

    #[test]
    fn test_invalidate_is_silent_when_anonymous() {
        let order = Arc::new(Mutex::new(Vec::<&str>::new()));
        let order_for_expired = order.clone();
        let order_for_logout = order.clone();
        let events = SessionEvents::new()
            .on_session_expired(move || order_for_expired.lock().push("expired"))
            .on_logout(move || order_for_logout.lock().push("logout"));

        let store = SessionStore::with_events(Arc::new(MemorySessionStorage::new()), events);
        store.hydrate();

        // a rejected sign-in attempt also answers 401; no session ends here
        store.invalidate();

        assert!(order.lock().is_empty());
    }

    // ==================== Identity Update Tests ====================

    #[test]
    fn test_update_identity_requires_authentication() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
        store.hydrate();

        let err = store
            .update_identity(identity("amira", Role::Member))
            .unwrap_err();
        assert!(matches!(err, RemoteHubError::ConfigurationError(_)));
    }

    #[test]
    fn test_update_identity_keeps_token_and_persists() {
        let backend = Arc::new(MemorySessionStorage::new());
        let store = SessionStore::new(backend.clone());
        store.hydrate();
        store
            .login(identity("amira", Role::Member), "jwt-token")
            .unwrap();

        let mut updated = identity("amira", Role::Member);
        updated.first_name = Some("Amira".to_string());
        store.update_identity(updated).unwrap();

        assert_eq!(store.token().as_deref(), Some("jwt-token"));
        assert_eq!(
            store.identity().unwrap().first_name.as_deref(),
            Some("Amira")
        );

        let persisted = backend.load().unwrap().unwrap();
        assert_eq!(persisted.identity.first_name.as_deref(), Some("Amira"));
        assert_eq!(persisted.token, "jwt-token");
    }

    // ==================== Snapshot Tests ====================

    #[test]
    fn test_snapshot_is_point_in_time() {
        let store = SessionStore::new(Arc::new(MemorySessionStorage::new()));
        store.hydrate();

        let before = store.snapshot();
        store
            .login(identity("amira", Role::Member), "jwt-token")
            .unwrap();

        assert!(!before.is_authenticated(), "snapshots must not track later changes");
        assert!(store.snapshot().is_authenticated());
    }
}
