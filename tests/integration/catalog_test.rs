//! Catalog queries against a provisioned SQLite database.

use std::collections::HashSet;

use artifact_explorer::catalog::{ParamKind, CATALOG};
use artifact_explorer::db::Value;
use pretty_assertions::assert_eq;

use super::common::{column, count, rows, Fixture};

/// Queries that aggregate without grouping and so always yield one row.
const SCALAR_AGGREGATES: &[&str] = &["average-rank", "total-color-entries"];

fn param_for(kind: Option<ParamKind>) -> Option<&'static str> {
    kind.map(|_| "1")
}

#[tokio::test]
async fn test_every_query_on_empty_store_returns_empty_table() {
    let fixture = Fixture::empty().await;
    let explorer = fixture.explorer().await;

    for query in CATALOG {
        let outcome = explorer.run_query(query.name, param_for(query.param)).await;
        assert!(outcome.error.is_none(), "{}: {:?}", query.name, outcome.error);
        assert!(!outcome.value.columns.is_empty(), "{} lost its columns", query.name);

        if SCALAR_AGGREGATES.contains(&query.name) {
            assert_eq!(outcome.value.row_count, 1, "{}", query.name);
        } else {
            assert!(outcome.value.is_empty(), "{} returned rows", query.name);
        }
    }
}

#[tokio::test]
async fn test_every_query_runs_on_seeded_store() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    for query in CATALOG {
        let outcome = explorer.run_query(query.name, param_for(query.param)).await;
        assert!(outcome.error.is_none(), "{}: {:?}", query.name, outcome.error);
    }
}

#[tokio::test]
async fn test_distinct_queries_are_sorted_and_non_blank() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let hues = rows(&explorer, "distinct-hues", None).await;
    assert_eq!(column(&hues, "hue"), vec!["Brown", "Grey", "Red"]);

    let cultures = rows(&explorer, "unique-cultures", None).await;
    assert_eq!(column(&cultures, "culture"), vec!["Byzantine", "Greek"]);
}

#[tokio::test]
async fn test_grouped_aggregates_return_one_row_per_group() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    for (name, key, groups) in [
        ("top-5-hues", "hue", 3),
        ("artifacts-per-department", "department", 3),
        ("average-coverage-by-hue", "hue", 3),
        ("classification-media-stats", "classification", 3),
        ("multiple-images", "objectid", 1),
    ] {
        let result = rows(&explorer, name, None).await;
        let keys = column(&result, key);
        let unique: HashSet<&String> = keys.iter().collect();
        assert_eq!(keys.len(), groups, "{name}: {keys:?}");
        assert_eq!(unique.len(), keys.len(), "{name} repeats a group");
    }

    let top = rows(&explorer, "top-5-hues", None).await;
    assert_eq!(top.rows[0], vec![Value::from("Grey"), Value::Int(3)]);

    let coverage = rows(&explorer, "average-coverage-by-hue", None).await;
    assert_eq!(coverage.rows[0][0], Value::from("Grey"));
    let grey = coverage.rows[0][1].as_f64().unwrap();
    assert!((grey - 0.5).abs() < 1e-9, "{grey}");
}

#[tokio::test]
async fn test_scalar_aggregates() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    assert_eq!(count(&explorer, "total-color-entries").await, 7);

    let rank = rows(&explorer, "average-rank", None).await;
    let average = rank.rows[0][0].as_f64().unwrap();
    assert!((average - 13.2).abs() < 1e-9, "{average}");
}

#[tokio::test]
async fn test_filters_and_joins() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let byzantine = rows(&explorer, "byzantine-11th-century", None).await;
    assert_eq!(column(&byzantine, "title"), vec!["Chalice"]);

    let archaic = rows(&explorer, "archaic-period", None).await;
    assert_eq!(column(&archaic, "title"), vec!["Kouros Fragment"]);

    let accession = rows(&explorer, "titles-by-accession-year", None).await;
    assert_eq!(accession.row_count, 4);
    assert_eq!(accession.rows[0][0], Value::from("River Landscape"));

    let without_media = rows(&explorer, "artifacts-without-media", None).await;
    assert_eq!(
        without_media.rows,
        vec![vec![Value::Int(4), Value::from("Coin of Justinian")]]
    );

    let exceeds = rows(&explorer, "colorcount-exceeds-mediacount", None).await;
    assert_eq!(column(&exceeds, "objectid"), vec!["1", "2", "3"]);

    let window = rows(&explorer, "media-1500-1600", None).await;
    assert_eq!(column(&window, "objectid"), vec!["5"]);

    let window = rows(&explorer, "artifacts-1500-1600", None).await;
    assert_eq!(column(&window, "title"), vec!["River Landscape"]);

    let hues = rows(&explorer, "byzantine-hues", None).await;
    assert_eq!(
        column(&hues, "title"),
        vec!["Chalice", "Chalice", "Icon of St. George", "Icon of St. George"]
    );
    assert_eq!(column(&hues, "hue"), vec!["Brown", "Grey", "", "Red"]);

    let all_hues = rows(&explorer, "artifact-hues", None).await;
    assert_eq!(all_hues.row_count, 5);

    let ranks = rows(&explorer, "period-media-ranks", None).await;
    assert_eq!(column(&ranks, "rank"), vec!["20", "10", "5"]);

    let grey = rows(&explorer, "top-10-grey", None).await;
    assert_eq!(column(&grey, "rank"), vec!["1", "5", "10", "20"]);
    assert!(column(&grey, "hue").iter().all(|h| h == "Grey"));
}

#[tokio::test]
async fn test_colors_for_artifact() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let colors = rows(&explorer, "colors-for-artifact", Some("1")).await;
    assert_eq!(column(&colors, "hue"), vec!["Grey", "Brown"]);

    let none = rows(&explorer, "colors-for-artifact", Some("999")).await;
    assert!(none.is_empty());
    assert_eq!(none.column_names(), vec!["objectid", "hue", "percent"]);
}

#[tokio::test]
async fn test_identifier_matches_text_stored_in_untyped_column() {
    let fixture = Fixture::with_seed(
        r#"
        DROP TABLE artifact_colors;
        CREATE TABLE artifact_colors (objectid, hue, percent);
        INSERT INTO artifact_colors VALUES ('12345', 'Grey', 0.7);
        INSERT INTO artifact_colors VALUES ('12346', 'Red', 0.2);
        "#,
    )
    .await;
    let explorer = fixture.explorer().await;

    let colors = rows(&explorer, "colors-for-artifact", Some("12345")).await;
    assert_eq!(column(&colors, "objectid"), vec!["12345"]);
    assert_eq!(column(&colors, "hue"), vec!["Grey"]);
}

#[tokio::test]
async fn test_injection_shaped_identifiers_match_nothing() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    for id in [
        "1' OR '1'='1",
        "1; DROP TABLE artifact_colors",
        "1 OR 1=1",
        "'); DELETE FROM artifact_colors; --",
    ] {
        let result = rows(&explorer, "colors-for-artifact", Some(id)).await;
        assert!(result.is_empty(), "{id} matched rows");
    }

    assert_eq!(count(&explorer, "total-color-entries").await, 7);
}

#[tokio::test]
async fn test_missing_parameter_is_reported() {
    let fixture = Fixture::museum().await;
    let explorer = fixture.explorer().await;

    let outcome = explorer.run_query("colors-for-artifact", None).await;
    assert!(outcome.value.is_empty());
    assert!(outcome.error.unwrap().to_string().contains("artifact id"));
}

#[tokio::test]
async fn test_end_to_end_single_byzantine_grey_artifact() {
    let fixture = Fixture::with_seed(
        r#"
        INSERT INTO artifact_metadata (id, title, culture, century)
            VALUES (1, 'Reliquary', 'Byzantine', '11th century');
        INSERT INTO artifact_colors (objectid, hue, percent) VALUES (1, 'Grey', 0.9);
        "#,
    )
    .await;
    let explorer = fixture.explorer().await;

    let hues = rows(&explorer, "byzantine-hues", None).await;
    assert_eq!(
        hues.rows,
        vec![vec![Value::from("Reliquary"), Value::from("Grey")]]
    );

    let grey = rows(&explorer, "top-10-grey", None).await;
    assert!(grey.is_empty());
}
