//! Test double for the database layer.
//!
//! `FailingDatabaseClient` fails every call with a fixed error, which is how
//! callers exercise the "report and return empty" paths without a broken file.

use super::{DatabaseClient, QueryResult, Row, Value};
use crate::error::{ExplorerError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A database client whose every call fails.
#[derive(Debug)]
pub struct FailingDatabaseClient {
    error: ExplorerError,
    calls: AtomicUsize,
}

impl FailingDatabaseClient {
    /// Fails with the given error.
    pub fn new(error: ExplorerError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails as if the database file could not be opened.
    pub fn unreachable() -> Self {
        Self::new(ExplorerError::connection("unable to open database file"))
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str, _params: &[Value]) -> Result<QueryResult> {
        self.fail()
    }

    async fn execute_batch(&self, _sql: &str, _rows: &[Row]) -> Result<u64> {
        self.fail()
    }
}
