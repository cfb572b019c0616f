//! The collect, peek and commit workflow.

use tracing::{info, warn};

use super::batch::{IngestionBatch, COLUMNS};
use super::source::RecordSource;
use crate::db::DatabaseClient;
use crate::error::{ExplorerError, Result};

/// Holds at most one fetched-but-unsaved batch.
///
/// The caller owns the session; nothing is shared between sessions.
#[derive(Debug, Clone, Default)]
pub struct IngestionSession {
    held: Option<IngestionBatch>,
}

impl IngestionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches a batch for `classification` and holds it, replacing whatever
    /// was held before. Returns the number of records now held.
    ///
    /// A failed fetch leaves the previous batch in place.
    pub async fn collect(&mut self, source: &dyn RecordSource, classification: &str) -> Result<usize> {
        let batch = source.fetch(classification).await?;
        let count = batch.len();
        if self.held.is_some() {
            info!("Replacing held batch with {count} '{classification}' records");
        } else {
            info!("Collected {count} '{classification}' records");
        }
        self.held = Some(batch);
        Ok(count)
    }

    /// The held batch, if any.
    pub fn peek(&self) -> Option<&IngestionBatch> {
        self.held.as_ref()
    }

    /// Appends every held record to `artifact_classification` in one
    /// transaction. The batch stays held, so committing twice appends twice.
    pub async fn commit(&self, db: &dyn DatabaseClient) -> Result<u64> {
        let batch = match &self.held {
            Some(batch) if !batch.is_empty() => batch,
            _ => {
                warn!("Commit requested with nothing collected");
                return Err(ExplorerError::no_data(
                    "Nothing collected yet. Collect a classification first.",
                ));
            }
        };

        let inserted = db.execute_batch(&insert_sql(), &batch.to_rows()).await?;
        info!("Inserted {inserted} records into artifact_classification");
        Ok(inserted)
    }

    /// Like `commit`, then drops the held batch. The batch is kept if the
    /// append fails.
    pub async fn commit_and_clear(&mut self, db: &dyn DatabaseClient) -> Result<u64> {
        let inserted = self.commit(db).await?;
        self.held = None;
        Ok(inserted)
    }
}

fn insert_sql() -> String {
    let placeholders: Vec<String> = (1..=COLUMNS.len()).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO artifact_classification ({}) VALUES ({})",
        COLUMNS.join(", "),
        placeholders.join(", ")
    )
}
