//! Database abstraction layer.
//!
//! Provides a trait-based interface for database operations so the executor,
//! introspector and ingestion session can run against SQLite or a test double.

mod migrations;
mod mock;
mod sqlite;
mod types;

pub use migrations::{run_migrations, CURRENT_VERSION};
pub use mock::FailingDatabaseClient;
pub use sqlite::SqliteClient;
pub use types::{ColumnInfo, QueryResult, Row, Value};

use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the interface for database clients.
///
/// All operations are async and return Results with ExplorerError.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a SQL statement with positional parameters and returns all rows.
    async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult>;

    /// Executes one statement once per parameter row inside a single
    /// transaction. Returns the number of rows affected.
    async fn execute_batch(&self, sql: &str, rows: &[Row]) -> Result<u64>;
}
