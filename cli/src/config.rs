//! Configuration file management for ~/.remotehub/config.toml
//!
//! # Configuration Format
//!
//! ```toml
//! [server]
//! url = "http://localhost:8085/api/v1"  # RemoteHub API base URL
//!
//! [connection]
//! timeout_secs = 30          # Request timeout
//! connect_timeout_secs = 10  # TCP + TLS handshake timeout
//!
//! [ui]
//! format = "table"           # table, json
//! color = true
//! ```
//!
//! Every section is optional; command-line flags override whatever the
//! file provides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CLIError, Result};

/// CLI configuration loaded from TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CLIConfiguration {
    /// Server connection settings
    pub server: Option<ServerConfig>,

    /// Timeout settings
    pub connection: Option<ConnectionConfig>,

    /// UI preferences
    pub ui: Option<UIConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API base URL (e.g., http://localhost:8085/api/v1)
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds (TCP + TLS handshake)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Output format: table, json
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_format() -> String {
    "table".to_string()
}

fn default_color() -> bool {
    true
}

/// API base URL used when neither flag nor config file provides one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8085/api/v1";

impl Default for CLIConfiguration {
    fn default() -> Self {
        Self {
            server: Some(ServerConfig {
                url: Some(DEFAULT_SERVER_URL.to_string()),
            }),
            connection: Some(ConnectionConfig {
                timeout_secs: default_timeout_secs(),
                connect_timeout_secs: default_connect_timeout_secs(),
            }),
            ui: Some(UIConfig {
                format: default_format(),
                color: default_color(),
            }),
        }
    }
}

pub fn expand_config_path(path: &Path) -> PathBuf {
    let path_str = path.to_str().unwrap_or("~/.remotehub/config.toml");
    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    path.to_path_buf()
}

pub fn default_config_path() -> PathBuf {
    expand_config_path(Path::new("~/.remotehub/config.toml"))
}

impl CLIConfiguration {
    /// Load configuration from file
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CLIError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: CLIConfiguration = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let expanded_path = expand_config_path(path);
        let path = &expanded_path;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CLIError::ConfigurationError(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn resolved_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or(ServerConfig { url: None })
    }

    pub fn resolved_connection(&self) -> ConnectionConfig {
        self.connection.clone().unwrap_or(ConnectionConfig {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        })
    }

    pub fn resolved_ui(&self) -> UIConfig {
        self.ui.clone().unwrap_or(UIConfig {
            format: default_format(),
            color: default_color(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CLIConfiguration::default();
        assert!(config.server.is_some());
        assert_eq!(
            config.server.as_ref().unwrap().url,
            Some(DEFAULT_SERVER_URL.to_string())
        );
        assert_eq!(config.resolved_connection().timeout_secs, 30);
        assert_eq!(config.resolved_connection().connect_timeout_secs, 10);
    }

    #[test]
    fn test_config_serialization() {
        let config = CLIConfiguration::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("url"));
        assert!(toml.contains("[connection]"));
        assert!(toml.contains("timeout_secs"));
        assert!(toml.contains("[ui]"));
    }

    #[test]
    fn test_tilde_expands_to_home_dir() {
        let expanded = expand_config_path(Path::new("~/.remotehub/config.toml"));
        if let Some(home) = dirs::home_dir() {
            assert!(
                expanded.starts_with(&home),
                "expected {:?} under {:?}",
                expanded,
                home
            );
            assert!(expanded.ends_with(".remotehub/config.toml"));
        }

        // Absolute paths pass through untouched.
        let absolute = expand_config_path(Path::new("/etc/remotehub/config.toml"));
        assert_eq!(absolute, PathBuf::from("/etc/remotehub/config.toml"));
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let config = CLIConfiguration::load(&path).unwrap();
        assert_eq!(
            config.resolved_server().url,
            Some(DEFAULT_SERVER_URL.to_string())
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CLIConfiguration::default();
        config.server = Some(ServerConfig {
            url: Some("https://hub.example.com/api/v1".to_string()),
        });
        config.save(&path).unwrap();

        let reloaded = CLIConfiguration::load(&path).unwrap();
        assert_eq!(
            reloaded.resolved_server().url,
            Some("https://hub.example.com/api/v1".to_string())
        );
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nformat = \"json\"\n").unwrap();

        let config = CLIConfiguration::load(&path).unwrap();
        assert!(config.server.is_none());
        assert_eq!(config.resolved_ui().format, "json");
        assert!(config.resolved_ui().color, "color should default to true");
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = {").unwrap();

        let err = CLIConfiguration::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
