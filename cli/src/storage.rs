//! File-backed session storage.
//!
//! Persists the signed-in session to a TOML dotfile so the user stays
//! signed in between `hub` invocations. The file holds a live bearer
//! token, so it is written with 0600 permissions on Unix.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use remotehub_link::{PersistedSession, RemoteHubError, SessionStorage};

/// Session storage backed by a TOML file under the user's config
/// directory (`~/.config/remotehub/session.toml` on Linux).
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Create storage at the default location for this platform.
    pub fn new() -> remotehub_link::Result<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            RemoteHubError::StorageError("Cannot determine the user config directory".to_string())
        })?;
        Ok(Self::with_path(
            config_dir.join("remotehub").join("session.toml"),
        ))
    }

    /// Create storage at an explicit path. Used by tests and by tools
    /// that manage their own directories.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Where the session file lives.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> remotehub_link::Result<Option<PersistedSession>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RemoteHubError::StorageError(format!(
                    "Failed to read session file: {}",
                    e
                )))
            }
        };

        let session = toml::from_str(&contents).map_err(|e| {
            RemoteHubError::StorageError(format!("Session file is not valid TOML: {}", e))
        })?;
        Ok(Some(session))
    }

    fn save(&self, session: &PersistedSession) -> remotehub_link::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RemoteHubError::StorageError(format!("Failed to create session directory: {}", e))
            })?;
        }

        let contents = toml::to_string_pretty(session).map_err(|e| {
            RemoteHubError::StorageError(format!("Failed to serialize session: {}", e))
        })?;
        std::fs::write(&self.path, contents).map_err(|e| {
            RemoteHubError::StorageError(format!("Failed to write session file: {}", e))
        })?;

        // The file contains a live token; keep it private to the user.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).map_err(
                |e| {
                    RemoteHubError::StorageError(format!(
                        "Failed to restrict session file permissions: {}",
                        e
                    ))
                },
            )?;
        }

        Ok(())
    }

    fn clear(&self) -> remotehub_link::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RemoteHubError::StorageError(format!(
                "Failed to delete session file: {}",
                e
            ))),
        }
    }
}
