//! Read-only guard for ad-hoc SQL.
//!
//! Catalog queries are trusted. Free text handed to `run_query` is parsed
//! and classified first; only a single read-only statement may run.

mod parser;

pub use parser::{classify_sql, SqlClassifier};

use std::fmt;

/// Safety level classification for SQL queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SafetyLevel {
    /// Read-only (SELECT, VALUES, plain EXPLAIN).
    Safe,
    /// Modifies rows (INSERT, UPDATE).
    Mutating,
    /// Loses data or changes the schema, or could not be understood.
    Destructive,
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::Mutating => write!(f, "Mutating"),
            Self::Destructive => write!(f, "Destructive"),
        }
    }
}

/// The type of SQL statement detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementType {
    Select,
    Explain,
    Insert,
    Update,
    Delete,
    Drop,
    Alter,
    Create,
    Pragma,
    /// More than one statement in the text.
    Multiple,
    /// Statement type could not be determined.
    Unknown,
}

impl fmt::Display for StatementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Select => "SELECT",
            Self::Explain => "EXPLAIN",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Drop => "DROP",
            Self::Alter => "ALTER",
            Self::Create => "CREATE",
            Self::Pragma => "PRAGMA",
            Self::Multiple => "Multiple statements",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Result of classifying a SQL query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// The determined safety level.
    pub level: SafetyLevel,
    /// The type of statement detected.
    pub statement_type: StatementType,
    /// Why the statement is not runnable, when it is not.
    pub reason: Option<String>,
}

impl ClassificationResult {
    /// Creates a new classification result.
    pub fn new(level: SafetyLevel, statement_type: StatementType) -> Self {
        Self {
            level,
            statement_type,
            reason: None,
        }
    }

    /// Creates a classification result with an explanation.
    pub fn with_reason(
        level: SafetyLevel,
        statement_type: StatementType,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            level,
            statement_type,
            reason: Some(reason.into()),
        }
    }

    /// Returns true if the statement only reads.
    pub fn is_read_only(&self) -> bool {
        self.level == SafetyLevel::Safe
    }

    /// Human-readable rejection message.
    pub fn rejection(&self) -> String {
        match &self.reason {
            Some(reason) => format!("Only read-only queries can be run here: {reason}"),
            None => format!(
                "Only read-only queries can be run here ({} is {})",
                self.statement_type, self.level
            ),
        }
    }
}
