//! Configuration management for Artifact Explorer.
//!
//! Handles loading configuration from TOML files and environment variables.

use crate::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that points at the artifact database.
pub const DB_PATH_ENV: &str = "ARTIFACT_EXPLORER_DB";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Artifact database settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Output settings for the command-line front end.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Artifact database settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: Option<PathBuf>,

    /// How long a statement waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Open the file read-only. Browsing works; inserts fail.
    #[serde(default)]
    pub read_only: bool,
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            busy_timeout_ms: default_busy_timeout_ms(),
            read_only: false,
        }
    }
}

impl DatabaseConfig {
    /// Creates a database config for the given file.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Busy timeout as a `Duration`.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Fills in the path from `ARTIFACT_EXPLORER_DB` when the file left it unset.
    pub fn apply_env_defaults(&mut self) {
        if self.path.is_none() {
            self.path = std::env::var_os(DB_PATH_ENV).map(PathBuf::from);
        }
    }

    /// Returns the configured path or a configuration error.
    pub fn require_path(&self) -> Result<&Path> {
        self.path.as_deref().ok_or_else(|| {
            ExplorerError::config(format!(
                "No database configured. Pass --db, set {DB_PATH_ENV}, or add [database] path to the config file"
            ))
        })
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Maximum rows printed per table (results are never truncated in memory).
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

fn default_max_rows() -> usize {
    1000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("artifact-explorer")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ExplorerError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ExplorerError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Applies the command-line database override; it wins over env and file.
    pub fn with_db_override(mut self, db: Option<PathBuf>) -> Self {
        if db.is_some() {
            self.database.path = db;
        }
        self.database.apply_env_defaults();
        self
    }
}
