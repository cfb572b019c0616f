//! Shared fixtures: a throwaway artifact database on disk.

use std::path::PathBuf;

use artifact_explorer::app::Explorer;
use artifact_explorer::config::DatabaseConfig;
use artifact_explorer::db::{QueryResult, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tempfile::{tempdir, TempDir};

/// The three externally provisioned tables.
pub const SCHEMA: &str = r#"
    CREATE TABLE artifact_metadata (
        id INTEGER PRIMARY KEY,
        title TEXT,
        culture TEXT,
        period TEXT,
        century TEXT,
        classification TEXT,
        department TEXT,
        accessionyear INTEGER
    );
    CREATE TABLE artifact_media (
        objectid INTEGER,
        rank INTEGER,
        colorcount INTEGER,
        mediacount INTEGER,
        datebegin INTEGER,
        dateend INTEGER
    );
    CREATE TABLE artifact_colors (
        objectid INTEGER,
        hue TEXT,
        percent REAL
    );
"#;

/// A small collection covering every catalog query.
pub const MUSEUM: &str = r#"
    INSERT INTO artifact_metadata VALUES
        (1, 'Chalice', 'Byzantine', 'Middle Byzantine', '11th century', 'Vessels', 'Asian and Mediterranean Art', 1951),
        (2, 'Kouros Fragment', 'Greek', 'Archaic', '6th century BCE', 'Sculpture', 'Ancient and Byzantine Art', 1921),
        (3, 'Icon of St. George', 'Byzantine', '', '14th century', 'Paintings', 'Asian and Mediterranean Art', 1980),
        (4, 'Coin of Justinian', 'Byzantine', 'Early Byzantine', '6th century', 'Coins', 'Ancient and Byzantine Art', NULL),
        (5, 'River Landscape', '', NULL, '16th century', 'Paintings', 'European Art', 2001);

    INSERT INTO artifact_media VALUES
        (1, 10, 3, 2, 1000, 1100),
        (1, 20, 1, 1, 1000, 1100),
        (2, 5, 4, 1, -550, -500),
        (3, 30, 2, 1, 1350, 1400),
        (5, 1, 2, 3, 1520, 1580);

    INSERT INTO artifact_colors VALUES
        (1, 'Grey', 0.5),
        (1, 'Brown', 0.3),
        (2, 'Grey', 0.6),
        (3, 'Red', 0.2),
        (3, '', 0.1),
        (5, 'Grey', 0.4),
        (5, NULL, 0.05);
"#;

/// A provisioned database file that lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// The three tables with no rows.
    pub async fn empty() -> Self {
        Self::with_seed("").await
    }

    /// The three tables holding the `MUSEUM` collection.
    pub async fn museum() -> Self {
        Self::with_seed(MUSEUM).await
    }

    /// The three tables plus whatever `seed` inserts.
    pub async fn with_seed(seed: &str) -> Self {
        let dir = tempdir().unwrap();
        let path = dir.path().join("artifacts.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        sqlx::raw_sql(SCHEMA).execute(&mut conn).await.unwrap();
        if !seed.trim().is_empty() {
            sqlx::raw_sql(seed).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();

        Self { _dir: dir, path }
    }

    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig::for_path(&self.path)
    }

    /// Opens an explorer, running migrations.
    pub async fn explorer(&self) -> Explorer {
        Explorer::open(&self.config()).await.unwrap()
    }
}

/// Runs a query that must succeed.
pub async fn rows(explorer: &Explorer, name_or_sql: &str, param: Option<&str>) -> QueryResult {
    let outcome = explorer.run_query(name_or_sql, param).await;
    assert!(outcome.error.is_none(), "{name_or_sql}: {:?}", outcome.error);
    outcome.value
}

/// Single integer from a `SELECT COUNT(*)`-style query.
pub async fn count(explorer: &Explorer, sql: &str) -> i64 {
    let result = rows(explorer, sql, None).await;
    result.rows[0][0].as_i64().unwrap()
}

/// One column as display strings.
pub fn column(result: &QueryResult, name: &str) -> Vec<String> {
    result
        .column_values(name)
        .into_iter()
        .map(Value::to_display_string)
        .collect()
}
