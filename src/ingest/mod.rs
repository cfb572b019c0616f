//! Simulated ingestion of classification-tagged records.

mod batch;
mod session;
mod source;

pub use batch::{ClassificationRecord, IngestionBatch};
pub use session::IngestionSession;
pub use source::{generate, RecordSource, SyntheticSource, SYNTHETIC_BATCH_SIZE};
