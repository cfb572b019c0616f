//! Schema diagnostics: table listing and one-row samples.

use tracing::debug;

use crate::db::{DatabaseClient, QueryResult, Value};
use crate::error::{ExplorerError, Result};
use crate::query::Outcome;

const LIST_TABLES_SQL: &str = r#"
    SELECT name FROM sqlite_master
    WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
    ORDER BY rowid
"#;

/// Lists user tables and samples their first row.
pub struct SchemaIntrospector<'a> {
    db: &'a dyn DatabaseClient,
}

impl<'a> SchemaIntrospector<'a> {
    /// Creates a new introspector.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db }
    }

    /// Names of user tables in creation order. Empty on failure.
    pub async fn list_tables(&self) -> Outcome<Vec<String>> {
        Outcome::report("list tables", self.table_names().await)
    }

    /// At most one row of `table`. Empty on failure or when the table has
    /// no rows.
    pub async fn sample_row(&self, table: &str) -> Outcome<QueryResult> {
        Outcome::report("sample row", self.fetch_sample(table).await)
    }

    /// A one-row sample for every user table, in listing order.
    ///
    /// A table whose sample fails still appears, with an empty result.
    pub async fn sample_all(&self) -> Outcome<Vec<(String, QueryResult)>> {
        let tables = match self.table_names().await {
            Ok(tables) => tables,
            Err(e) => return Outcome::report("sample tables", Err(e)),
        };

        let mut samples = Vec::with_capacity(tables.len());
        let mut first_error = None;
        for table in tables {
            let sample = self.sample_row(&table).await;
            if first_error.is_none() {
                first_error = sample.error;
            }
            samples.push((table, sample.value));
        }

        Outcome {
            value: samples,
            error: first_error,
        }
    }

    async fn table_names(&self) -> Result<Vec<String>> {
        let result = self.db.execute_query(LIST_TABLES_SQL, &[]).await?;
        let names: Vec<String> = result
            .rows
            .into_iter()
            .filter_map(|row| row.into_iter().next())
            .filter_map(|value| match value {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect();
        debug!("Found {} tables", names.len());
        Ok(names)
    }

    async fn fetch_sample(&self, table: &str) -> Result<QueryResult> {
        // Identifiers cannot be bound, so only names the store itself reports
        // are ever spliced into SQL.
        let tables = self.table_names().await?;
        let Some(name) = tables.iter().find(|t| t.as_str() == table) else {
            return Err(ExplorerError::query(format!("no such table: {table}")));
        };

        let sql = format!("SELECT * FROM {} LIMIT 1", quote_identifier(name));
        self.db.execute_query(&sql, &[]).await
    }
}

/// Quotes an identifier for SQLite, doubling embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
