//! Service configuration
//!
//! JSON configuration file covering the HTTP listener, CORS origins, and
//! the SQLite database location. Every field has a default so a partial
//! (or absent) config file still yields a runnable service.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Logger;

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: localhost dev servers)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Path to the SQLite database file (default: "./league.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5080
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(), // CRA dev server
        "http://localhost:5173".to_string(), // Vite dev server
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./league.db")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            database_path: default_database_path(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// A missing file is not fatal: defaults are used and a warning is
    /// logged. A file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Logger::warn(
                    "config_missing",
                    &[("path", &path.display().to_string())],
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Read(path.to_path_buf(), e)),
        };

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("invalid config JSON in {0}: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}
