//! The explorer facade.
//!
//! Bundles the database client, the record source and one ingestion session
//! behind the operations the CLI and shell call.

use crate::config::DatabaseConfig;
use crate::db::{DatabaseClient, QueryResult, SqliteClient};
use crate::error::Result;
use crate::ingest::{IngestionSession, RecordSource, SyntheticSource};
use crate::query::{Outcome, QueryExecutor, QueryOutcome, SchemaIntrospector};

/// One caller's view of the artifact database.
pub struct Explorer {
    /// Database client for executing queries.
    db: Box<dyn DatabaseClient>,
    /// Where collected records come from.
    source: Box<dyn RecordSource>,
    /// Records fetched but not yet saved.
    session: IngestionSession,
}

impl Explorer {
    /// Opens the SQLite database described by `config`, applying migrations.
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let client = SqliteClient::open(config).await?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Wraps an existing client, collecting from the synthetic source.
    pub fn with_client(db: Box<dyn DatabaseClient>) -> Self {
        Self {
            db,
            source: Box::new(SyntheticSource),
            session: IngestionSession::new(),
        }
    }

    /// Replaces the record source.
    pub fn with_source(mut self, source: Box<dyn RecordSource>) -> Self {
        self.source = source;
        self
    }

    /// Runs a catalog query by name, or read-only SQL text.
    pub async fn run_query(&self, name_or_text: &str, param: Option<&str>) -> QueryOutcome {
        QueryExecutor::new(self.db.as_ref())
            .run(name_or_text, param)
            .await
    }

    /// User tables in creation order.
    pub async fn list_tables(&self) -> Outcome<Vec<String>> {
        SchemaIntrospector::new(self.db.as_ref()).list_tables().await
    }

    /// First row of `table`.
    pub async fn sample_row(&self, table: &str) -> QueryOutcome {
        SchemaIntrospector::new(self.db.as_ref())
            .sample_row(table)
            .await
    }

    /// First row of every user table.
    pub async fn sample_all(&self) -> Outcome<Vec<(String, QueryResult)>> {
        SchemaIntrospector::new(self.db.as_ref()).sample_all().await
    }

    /// Fetches records for `classification` into the session.
    pub async fn collect_data(&mut self, classification: &str) -> Result<usize> {
        self.session
            .collect(self.source.as_ref(), classification)
            .await
    }

    /// The held batch as a table; empty when nothing is held.
    pub fn peek_data(&self) -> QueryResult {
        self.session
            .peek()
            .map(|batch| batch.to_query_result())
            .unwrap_or_default()
    }

    /// Appends the held batch. The batch stays held.
    pub async fn insert_data(&self) -> Result<u64> {
        self.session.commit(self.db.as_ref()).await
    }

    /// Appends the held batch, then drops it.
    pub async fn insert_data_and_clear(&mut self) -> Result<u64> {
        self.session.commit_and_clear(self.db.as_ref()).await
    }
}
