//! Schema versioning and migrations for the artifact database.
//!
//! The metadata, media and color tables are provisioned externally and are
//! never touched here. Migrations only own the tables this crate writes.

use crate::error::{ExplorerError, Result};
use sqlx::sqlite::SqliteConnection;
use tracing::info;

/// Latest schema version known to this build.
pub const CURRENT_VERSION: i32 = 1;

/// Runs all pending migrations on the database.
pub async fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    ensure_schema_versions_table(conn).await?;

    let current = get_current_version(conn).await?;

    if current > CURRENT_VERSION {
        return Err(ExplorerError::config(format!(
            "Database schema version ({}) is newer than supported version ({}). \
             Please upgrade Artifact Explorer.",
            current, CURRENT_VERSION
        )));
    }

    if current < CURRENT_VERSION {
        info!(
            "Migrating artifact database from version {} to {}",
            current, CURRENT_VERSION
        );
        run_pending_migrations(conn, current).await?;
    }

    Ok(())
}

/// Ensures the schema_versions table exists.
async fn ensure_schema_versions_table(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_versions (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .map_err(|e| ExplorerError::query(format!("Failed to create schema_versions table: {e}")))?;

    Ok(())
}

/// Gets the current schema version.
async fn get_current_version(conn: &mut SqliteConnection) -> Result<i32> {
    let row: Option<(Option<i32>,)> = sqlx::query_as("SELECT MAX(version) FROM schema_versions")
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| ExplorerError::query(format!("Failed to get schema version: {e}")))?;

    Ok(row.and_then(|(v,)| v).unwrap_or(0))
}

/// Runs migrations from the current version to the target version.
async fn run_pending_migrations(conn: &mut SqliteConnection, from_version: i32) -> Result<()> {
    for version in (from_version + 1)..=CURRENT_VERSION {
        run_migration(conn, version).await?;
        record_version(conn, version).await?;
        info!("Applied migration v{}", version);
    }
    Ok(())
}

/// Records a completed migration version.
async fn record_version(conn: &mut SqliteConnection, version: i32) -> Result<()> {
    sqlx::query("INSERT INTO schema_versions (version) VALUES (?)")
        .bind(version)
        .execute(&mut *conn)
        .await
        .map_err(|e| ExplorerError::query(format!("Failed to record migration: {e}")))?;
    Ok(())
}

async fn run_migration(conn: &mut SqliteConnection, version: i32) -> Result<()> {
    match version {
        1 => migration_v1(conn).await,
        _ => Err(ExplorerError::internal(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: table that receives committed ingestion batches.
///
/// `IF NOT EXISTS` adopts a table an earlier append-on-demand tool already
/// created with the same four columns.
async fn migration_v1(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artifact_classification (
            title TEXT,
            classification TEXT,
            culture TEXT,
            period TEXT
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        ExplorerError::query(format!("Failed to create artifact_classification table: {e}"))
    })?;

    Ok(())
}
