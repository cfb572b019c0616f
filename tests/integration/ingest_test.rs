//! Collect, peek and commit against a real database.

use artifact_explorer::app::Explorer;
use artifact_explorer::db::{SqliteClient, Value};
use artifact_explorer::error::{ExplorerError, Result};
use artifact_explorer::ingest::{generate, ClassificationRecord, IngestionBatch, RecordSource};
use async_trait::async_trait;
use pretty_assertions::assert_eq;

use super::common::{count, rows, Fixture};

const INGESTED: &str = "SELECT COUNT(*) FROM artifact_classification";

#[tokio::test]
async fn test_commit_with_nothing_collected_is_no_data() {
    let fixture = Fixture::empty().await;
    let explorer = fixture.explorer().await;

    let before = count(&explorer, INGESTED).await;
    let err = explorer.insert_data().await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoData(_)));
    assert_eq!(count(&explorer, INGESTED).await, before);
}

#[tokio::test]
async fn test_commit_appends_collected_batch() {
    let fixture = Fixture::empty().await;
    let mut explorer = fixture.explorer().await;

    let before = count(&explorer, INGESTED).await;
    assert_eq!(explorer.collect_data("Coins").await.unwrap(), 2500);
    assert_eq!(explorer.insert_data().await.unwrap(), 2500);

    assert_eq!(count(&explorer, INGESTED).await - before, 2500);
    let tagged = count(
        &explorer,
        "SELECT COUNT(*) FROM artifact_classification \
         WHERE classification = 'Coins' AND culture = 'Byzantine' AND period = '16th Century'",
    )
    .await;
    assert_eq!(tagged, 2500);

    let titles = rows(
        &explorer,
        "SELECT title FROM artifact_classification ORDER BY rowid LIMIT 2",
        None,
    )
    .await;
    assert_eq!(
        titles.rows,
        vec![
            vec![Value::from("Coins Artifact 1")],
            vec![Value::from("Coins Artifact 2")]
        ]
    );
}

#[tokio::test]
async fn test_second_commit_duplicates_rows() {
    let fixture = Fixture::empty().await;
    let mut explorer = fixture.explorer().await;

    explorer.collect_data("Drawings").await.unwrap();
    explorer.insert_data().await.unwrap();
    explorer.insert_data().await.unwrap();

    assert_eq!(count(&explorer, INGESTED).await, 5000);
    assert_eq!(explorer.peek_data().row_count, 2500);
}

#[tokio::test]
async fn test_commit_and_clear_drops_batch() {
    let fixture = Fixture::empty().await;
    let mut explorer = fixture.explorer().await;

    explorer.collect_data("Scriptures").await.unwrap();
    assert_eq!(explorer.insert_data_and_clear().await.unwrap(), 2500);
    assert!(explorer.peek_data().is_empty());

    let err = explorer.insert_data().await.unwrap_err();
    assert!(matches!(err, ExplorerError::NoData(_)));
    assert_eq!(count(&explorer, INGESTED).await, 2500);
}

#[tokio::test]
async fn test_recollect_replaces_held_batch() {
    let fixture = Fixture::empty().await;
    let mut explorer = fixture.explorer().await;

    explorer.collect_data("Coins").await.unwrap();
    explorer.collect_data("Paintings").await.unwrap();

    let peeked = explorer.peek_data();
    assert_eq!(peeked, generate("Paintings").to_query_result());
    assert!(peeked
        .column_values("classification")
        .iter()
        .all(|v| **v == Value::from("Paintings")));

    explorer.insert_data().await.unwrap();
    let coins = count(
        &explorer,
        "SELECT COUNT(*) FROM artifact_classification WHERE classification = 'Coins'",
    )
    .await;
    assert_eq!(coins, 0);
}

#[tokio::test]
async fn test_ingested_per_classification_query() {
    let fixture = Fixture::empty().await;
    let mut explorer = fixture.explorer().await;

    explorer.collect_data("Coins").await.unwrap();
    explorer.insert_data().await.unwrap();
    explorer.insert_data().await.unwrap();
    explorer.collect_data("Jewellery").await.unwrap();
    explorer.insert_data_and_clear().await.unwrap();

    let per_class = rows(&explorer, "ingested-per-classification", None).await;
    assert_eq!(
        per_class.rows,
        vec![
            vec![Value::from("Coins"), Value::Int(5000)],
            vec![Value::from("Jewellery"), Value::Int(2500)],
        ]
    );
}

#[tokio::test]
async fn test_ingestion_survives_reopen() {
    let fixture = Fixture::empty().await;
    {
        let mut explorer = fixture.explorer().await;
        explorer.collect_data("Coins").await.unwrap();
        explorer.insert_data_and_clear().await.unwrap();
    }

    let explorer = fixture.explorer().await;
    assert!(explorer.peek_data().is_empty());
    assert_eq!(count(&explorer, INGESTED).await, 2500);
}

/// Returns two fixed records for any classification.
struct CuratedSource;

#[async_trait]
impl RecordSource for CuratedSource {
    async fn fetch(&self, classification: &str) -> Result<IngestionBatch> {
        let record = |title: &str| ClassificationRecord {
            title: title.to_string(),
            classification: classification.to_string(),
            culture: "Roman".to_string(),
            period: "Imperial".to_string(),
        };
        Ok(IngestionBatch::new(vec![record("Denarius"), record("Aureus")]))
    }
}

#[tokio::test]
async fn test_replacement_source_feeds_collect_and_commit() {
    let fixture = Fixture::empty().await;
    let client = SqliteClient::open(&fixture.config()).await.unwrap();
    let mut explorer = Explorer::with_client(Box::new(client)).with_source(Box::new(CuratedSource));

    assert_eq!(explorer.collect_data("Coins").await.unwrap(), 2);
    assert_eq!(explorer.peek_data().rows[1][0], Value::from("Aureus"));
    assert_eq!(explorer.insert_data_and_clear().await.unwrap(), 2);

    let stored = rows(
        &explorer,
        "SELECT title, culture FROM artifact_classification ORDER BY rowid",
        None,
    )
    .await;
    assert_eq!(
        stored.rows,
        vec![
            vec![Value::from("Denarius"), Value::from("Roman")],
            vec![Value::from("Aureus"), Value::from("Roman")],
        ]
    );
    assert!(explorer.peek_data().is_empty());
}
