//! Non-raising query execution.
//!
//! Every failure is logged and carried back next to an empty result, so a
//! caller always has a table to show.

use std::time::Instant;

use tracing::{debug, error, warn};

use crate::catalog::{self, QueryDef};
use crate::db::{DatabaseClient, QueryResult, Value};
use crate::error::{ExplorerError, Result};
use crate::safety::classify_sql;

/// A value plus the error that was reported while producing it, if any.
///
/// On failure `value` is the type's empty default.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    /// The produced value (empty on failure).
    pub value: T,
    /// The reported failure.
    pub error: Option<ExplorerError>,
}

/// Outcome of running one query.
pub type QueryOutcome = Outcome<QueryResult>;

impl<T: Default> Outcome<T> {
    /// A successful outcome.
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// A failed outcome with an empty value.
    pub fn failed(error: ExplorerError) -> Self {
        Self {
            value: T::default(),
            error: Some(error),
        }
    }

    /// Converts a `Result`, logging the failure under `context`.
    pub fn report(context: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(e) => {
                error!("{context}: {}: {e}", e.category());
                Self::failed(e)
            }
        }
    }

    /// Returns true if no failure was reported.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts back into a `Result`, for callers that want to propagate.
    pub fn into_result(self) -> Result<T> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.value),
        }
    }
}

/// Runs catalog queries and vetted ad-hoc SQL.
pub struct QueryExecutor<'a> {
    db: &'a dyn DatabaseClient,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new query executor.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db }
    }

    /// Runs a catalog query, binding `param` when the query takes one.
    pub async fn execute(&self, query: &QueryDef, param: Option<&str>) -> QueryOutcome {
        let result = match query.bind(param) {
            Ok(params) => self.fetch(query.sql, &params).await,
            Err(e) => Err(e),
        };
        Outcome::report(query.name, result)
    }

    /// Runs ad-hoc SQL if it is a single read-only statement.
    pub async fn execute_text(&self, sql: &str) -> QueryOutcome {
        let classification = classify_sql(sql);
        if !classification.is_read_only() {
            warn!(
                "Rejected {} statement ({})",
                classification.statement_type, classification.level
            );
            return Outcome::report(
                "ad-hoc query",
                Err(ExplorerError::query(classification.rejection())),
            );
        }
        Outcome::report("ad-hoc query", self.fetch(sql, &[]).await)
    }

    /// Resolves `name_or_text` against the catalog first and falls back to
    /// treating it as SQL. A parameter is only meaningful for catalog queries.
    pub async fn run(&self, name_or_text: &str, param: Option<&str>) -> QueryOutcome {
        match catalog::lookup(name_or_text) {
            Some(query) => self.execute(query, param).await,
            None if param.is_some() => Outcome::report(
                "ad-hoc query",
                Err(ExplorerError::query(format!(
                    "Unknown query '{}'; parameters only apply to catalog queries",
                    name_or_text.trim()
                ))),
            ),
            None => self.execute_text(name_or_text).await,
        }
    }

    async fn fetch(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        let start = Instant::now();
        let result = self.db.execute_query(sql, params).await?;
        debug!(
            "Fetched {} rows in {:?}",
            result.row_count,
            start.elapsed()
        );
        Ok(result)
    }
}
