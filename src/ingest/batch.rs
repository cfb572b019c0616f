//! Records waiting to be appended to `artifact_classification`.

use crate::db::{ColumnInfo, QueryResult, Row, Value};

/// Column order shared by peeks and inserts.
pub const COLUMNS: [&str; 4] = ["title", "classification", "culture", "period"];

/// One classification-tagged record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub title: String,
    pub classification: String,
    pub culture: String,
    pub period: String,
}

impl ClassificationRecord {
    /// Positional values in `COLUMNS` order.
    pub fn to_row(&self) -> Row {
        vec![
            Value::from(self.title.as_str()),
            Value::from(self.classification.as_str()),
            Value::from(self.culture.as_str()),
            Value::from(self.period.as_str()),
        ]
    }
}

/// An ordered batch of fetched records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionBatch {
    pub records: Vec<ClassificationRecord>,
}

impl IngestionBatch {
    /// Wraps an ordered list of records.
    pub fn new(records: Vec<ClassificationRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows for a batch insert, in record order.
    pub fn to_rows(&self) -> Vec<Row> {
        self.records.iter().map(ClassificationRecord::to_row).collect()
    }

    /// Tabular view of the batch, for peeking.
    pub fn to_query_result(&self) -> QueryResult {
        let columns = COLUMNS
            .iter()
            .map(|name| ColumnInfo::new(*name, "TEXT"))
            .collect();
        QueryResult::with_data(columns, self.to_rows())
    }
}
