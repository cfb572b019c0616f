//! Table listing and row sampling.

use artifact_explorer::error::ExplorerError;
use pretty_assertions::assert_eq;

use super::common::{count, Fixture};

#[tokio::test]
async fn test_list_tables_in_creation_order() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let tables = explorer.list_tables().await;
    assert!(tables.error.is_none());
    assert_eq!(
        tables.value[..3],
        ["artifact_metadata", "artifact_media", "artifact_colors"]
    );
    assert!(tables.value.iter().any(|t| t == "artifact_classification"));
    assert!(tables.value.iter().all(|t| !t.starts_with("sqlite_")));
}

#[tokio::test]
async fn test_sample_row_returns_at_most_one_row() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let sample = explorer.sample_row("artifact_colors").await;
    assert!(sample.error.is_none());
    assert_eq!(sample.value.row_count, 1);
    assert_eq!(sample.value.column_names(), vec!["objectid", "hue", "percent"]);
}

#[tokio::test]
async fn test_sample_row_of_empty_table() {
    let fixture = Fixture::empty().await;
    let explorer = fixture.explorer().await;

    let sample = explorer.sample_row("artifact_media").await;
    assert!(sample.error.is_none());
    assert!(sample.value.is_empty());
    assert_eq!(sample.value.columns.len(), 6);
}

#[tokio::test]
async fn test_sample_row_rejects_unknown_names() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    for name in ["no_such_table", "artifact_colors; DROP TABLE artifact_colors"] {
        let sample = explorer.sample_row(name).await;
        assert!(sample.value.is_empty());
        assert!(matches!(sample.error, Some(ExplorerError::Query(_))), "{name}");
    }

    assert_eq!(count(&explorer, "total-color-entries").await, 7);
}

#[tokio::test]
async fn test_sample_all_covers_every_table() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let tables = explorer.list_tables().await.value;
    let samples = explorer.sample_all().await;

    assert!(samples.error.is_none());
    let sampled: Vec<&String> = samples.value.iter().map(|(name, _)| name).collect();
    assert_eq!(sampled, tables.iter().collect::<Vec<_>>());
    assert!(samples.value.iter().all(|(_, sample)| sample.row_count <= 1));
}
