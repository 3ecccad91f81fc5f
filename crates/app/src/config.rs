//! Client configuration
//!
//! Loaded from `parley.toml`; every field has a default and command-line
//! flags win over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use parley_net::ApiConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Args;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the HTTP API
    pub server_url: String,
    /// host:port of the event socket
    pub socket_addr: String,
    pub request_timeout_ms: u64,
    /// How long a reply-target lookup may hold up rendering its message
    pub reply_lookup_timeout_ms: u64,
    /// Raw Cookie header for an authenticated session
    pub session_cookie: Option<String>,
    pub notifications: bool,
    /// Use the username-only identity endpoint
    pub legacy_identity: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            socket_addr: format!("127.0.0.1:{}", parley_net::DEFAULT_SOCKET_PORT),
            request_timeout_ms: 10_000,
            reply_lookup_timeout_ms: 3_000,
            session_cookie: None,
            notifications: true,
            legacy_identity: false,
        }
    }
}

impl ClientConfig {
    /// Default config location for this platform
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "parley", "parley").map(|dirs| dirs.config_dir().join("parley.toml"))
    }

    /// Load from a file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Resolve the config from flags, file and defaults
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match args.config.clone().or_else(Self::default_path) {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(server) = &args.server {
            self.server_url = server.clone();
        }
        if let Some(socket) = &args.socket {
            self.socket_addr = socket.clone();
        }
        if let Some(cookie) = &args.cookie {
            self.session_cookie = Some(cookie.clone());
        }
        if args.quiet {
            self.notifications = false;
        }
    }

    pub fn reply_lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.reply_lookup_timeout_ms)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.server_url.clone(),
            request_timeout: Duration::from_millis(self.request_timeout_ms),
            session_cookie: self.session_cookie.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url = \"http://chat.example\"").unwrap();
        writeln!(file, "reply_lookup_timeout_ms = 500").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.server_url, "http://chat.example");
        assert_eq!(config.reply_lookup_timeout(), Duration::from_millis(500));
        assert_eq!(config.request_timeout_ms, 10_000);
        assert!(config.notifications);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "notifications = \"loud\"").unwrap();
        assert!(ClientConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parley.toml");
        std::fs::write(&path, "socket_addr = \"10.0.0.1:9000\"\n").unwrap();

        let args = Args {
            config: Some(path),
            server: Some("http://override".to_string()),
            cookie: Some("session=abc".to_string()),
            quiet: true,
            ..Args::default()
        };
        let config = ClientConfig::from_args(&args).unwrap();
        assert_eq!(config.socket_addr, "10.0.0.1:9000");
        assert_eq!(config.server_url, "http://override");
        assert!(!config.notifications);

        let api = config.api_config();
        assert_eq!(api.session_cookie.as_deref(), Some("session=abc"));
    }
}
