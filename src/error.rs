//! Error types for Artifact Explorer.
//!
//! Defines the main error enum used throughout the application.

use thiserror::Error;

/// Main error type for Artifact Explorer operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExplorerError {
    /// Store unreachable (missing file, permissions, locked beyond the busy timeout).
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store rejected or failed a statement (syntax, missing table, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// A commit was attempted with no collected batch.
    #[error("No data: {0}")]
    NoData(String),

    /// Configuration errors (invalid config file, unusable database path, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExplorerError {
    /// Creates a connection error with the given message.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error with the given message.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Creates a no-data error with the given message.
    pub fn no_data(msg: impl Into<String>) -> Self {
        Self::NoData(msg.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Connection(_) => "Connection Error",
            Self::Query(_) => "Query Error",
            Self::NoData(_) => "No Data",
            Self::Config(_) => "Configuration Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ExplorerError.
pub type Result<T> = std::result::Result<T, ExplorerError>;
