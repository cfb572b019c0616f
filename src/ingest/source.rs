//! Record sources for ingestion.
//!
//! Only a synthetic generator exists today. A real collection API would
//! implement `RecordSource` and plug into the session unchanged.

use async_trait::async_trait;

use super::batch::{ClassificationRecord, IngestionBatch};
use crate::error::Result;

/// Records produced per synthetic fetch.
pub const SYNTHETIC_BATCH_SIZE: usize = 2500;

const SYNTHETIC_CULTURE: &str = "Byzantine";
const SYNTHETIC_PERIOD: &str = "16th Century";

/// Something that can fetch records for a classification.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches a batch tagged with `classification`.
    async fn fetch(&self, classification: &str) -> Result<IngestionBatch>;
}

/// Stand-in for an external collection API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticSource;

#[async_trait]
impl RecordSource for SyntheticSource {
    async fn fetch(&self, classification: &str) -> Result<IngestionBatch> {
        Ok(generate(classification))
    }
}

/// Builds the deterministic placeholder batch for `classification`.
///
/// Titles run from "{classification} Artifact 1" to
/// "{classification} Artifact 2500". Any string is accepted, including an
/// empty one.
pub fn generate(classification: &str) -> IngestionBatch {
    let records = (1..=SYNTHETIC_BATCH_SIZE)
        .map(|i| ClassificationRecord {
            title: format!("{classification} Artifact {i}"),
            classification: classification.to_string(),
            culture: SYNTHETIC_CULTURE.to_string(),
            period: SYNTHETIC_PERIOD.to_string(),
        })
        .collect();
    IngestionBatch::new(records)
}
