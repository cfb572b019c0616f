//! SQLite database client implementation.
//!
//! Provides the `SqliteClient` struct that implements the `DatabaseClient`
//! trait using sqlx. No pool is kept: every call opens a connection, runs,
//! and closes it again.

use crate::config::DatabaseConfig;
use crate::db::{migrations, ColumnInfo, DatabaseClient, QueryResult, Row, Value};
use crate::error::{ExplorerError, Result};
use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Column as SqlxColumn, Connection, Executor, Row as SqlxRow, Statement, TypeInfo, ValueRef};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// SQLite database client.
#[derive(Debug, Clone)]
pub struct SqliteClient {
    options: SqliteConnectOptions,
    path: PathBuf,
}

impl SqliteClient {
    /// Opens the artifact database described by `config` and applies pending
    /// migrations. The file must already exist.
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let path = config.require_path()?;
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(false)
            .read_only(config.read_only)
            .busy_timeout(config.busy_timeout());

        let client = Self {
            options,
            path: path.to_path_buf(),
        };

        let mut conn = client.connect().await?;
        let migrated = migrations::run_migrations(&mut conn).await;
        close(conn).await;
        match migrated {
            Ok(()) => {}
            // A read-only file can still be browsed; inserts fail when attempted.
            Err(e) if is_read_only_error(&e) => {
                warn!(
                    "Database {} is read-only; migrations skipped: {e}",
                    client.path.display()
                );
            }
            Err(e) => return Err(e),
        }

        info!("Artifact database opened at {}", client.path.display());
        Ok(client)
    }

    /// Creates a client without touching the file or running migrations.
    ///
    /// Connection problems surface on the first call.
    pub fn unchecked(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(false);
        Self { options, path }
    }

    async fn connect(&self) -> Result<SqliteConnection> {
        debug!("Opening connection to {}", self.path.display());
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| map_connection_error(e, &self.path))
    }
}

#[async_trait]
impl DatabaseClient for SqliteClient {
    async fn execute_query(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        let mut conn = self.connect().await?;
        let result = fetch_all(&mut conn, sql, params).await;
        close(conn).await;
        result
    }

    async fn execute_batch(&self, sql: &str, rows: &[Row]) -> Result<u64> {
        let mut conn = self.connect().await?;
        let result = write_all(&mut conn, sql, rows).await;
        close(conn).await;
        result
    }
}

async fn fetch_all(conn: &mut SqliteConnection, sql: &str, params: &[Value]) -> Result<QueryResult> {
    let start = Instant::now();

    // Prepared statement metadata gives column names even when nothing matches.
    let statement = Executor::prepare(&mut *conn, sql)
        .await
        .map_err(|e| ExplorerError::query(format_query_error(e)))?;
    let columns: Vec<ColumnInfo> = statement
        .columns()
        .iter()
        .map(|col| ColumnInfo::new(col.name(), col.type_info().name()))
        .collect();

    let expected = statement.parameters().and_then(|p| p.right());
    if let Some(expected) = expected {
        if expected != params.len() {
            return Err(ExplorerError::query(format!(
                "Statement expects {expected} parameter(s), got {}",
                params.len()
            )));
        }
    }

    let fetched = bind_values(sqlx::query(sql), params)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| ExplorerError::query(format_query_error(e)))?;

    let rows: Vec<Row> = fetched.iter().map(convert_row).collect();
    debug!("Query returned {} rows", rows.len());

    Ok(QueryResult::with_data(columns, rows).with_execution_time(start.elapsed()))
}

async fn write_all(conn: &mut SqliteConnection, sql: &str, rows: &[Row]) -> Result<u64> {
    let mut tx = conn
        .begin()
        .await
        .map_err(|e| ExplorerError::query(format_query_error(e)))?;

    let mut affected = 0;
    for row in rows {
        let done = bind_values(sqlx::query(sql), row)
            .execute(&mut *tx)
            .await
            .map_err(|e| ExplorerError::query(format_query_error(e)))?;
        affected += done.rows_affected();
    }

    tx.commit()
        .await
        .map_err(|e| ExplorerError::query(format_query_error(e)))?;
    Ok(affected)
}

async fn close(conn: SqliteConnection) {
    if let Err(e) = conn.close().await {
        debug!("Ignoring error while closing connection: {e}");
    }
}

/// Binds each value as the next positional parameter.
fn bind_values<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [Value],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            Value::Null => query.bind(None::<String>),
            Value::Bool(b) => query.bind(*b),
            Value::Int(i) => query.bind(*i),
            Value::Float(f) => query.bind(*f),
            Value::String(s) => query.bind(s.as_str()),
            Value::Bytes(b) => query.bind(b.as_slice()),
        };
    }
    query
}

/// Converts a sqlx SqliteRow to our Row type.
fn convert_row(row: &SqliteRow) -> Row {
    (0..row.columns().len())
        .map(|i| convert_value(row, i))
        .collect()
}

/// Converts a single column value, using the storage class of the value
/// itself rather than the declared column type.
fn convert_value(row: &SqliteRow, index: usize) -> Value {
    let storage_class = match row.try_get_raw(index) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(raw) => raw.type_info().name().to_string(),
        Err(_) => return Value::Null,
    };

    match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => row
            .try_get_unchecked::<i64, _>(index)
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "REAL" | "NUMERIC" => row
            .try_get_unchecked::<f64, _>(index)
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get_unchecked::<Vec<u8>, _>(index)
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        _ => row
            .try_get_unchecked::<String, _>(index)
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}

/// Maps sqlx connection errors to user-friendly messages.
fn map_connection_error(error: sqlx::Error, path: &Path) -> ExplorerError {
    let error_str = error.to_string().to_lowercase();

    if error_str.contains("unable to open") {
        ExplorerError::connection(format!(
            "Cannot open database file {}. Check that it exists and is readable.",
            path.display()
        ))
    } else if error_str.contains("locked") || error_str.contains("busy") {
        ExplorerError::connection(format!("Database {} is locked by another process.", path.display()))
    } else {
        ExplorerError::connection(error.to_string())
    }
}

/// Returns true if `error` came from writing to a read-only database.
fn is_read_only_error(error: &ExplorerError) -> bool {
    let message = error.to_string().to_lowercase();
    message.contains("readonly") || message.contains("read-only database")
}

/// Formats a statement error, keeping only the store's message when available.
fn format_query_error(error: sqlx::Error) -> String {
    match error.as_database_error() {
        Some(db_error) => db_error.message().to_string(),
        None => error.to_string(),
    }
}
