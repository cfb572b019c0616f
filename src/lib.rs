//! Artifact explorer - canned queries and simulated ingestion over a
//! museum artifact SQLite database.
//!
//! This library exposes the core modules for the binary and integration tests.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod query;
pub mod render;
pub mod safety;
pub mod shell;
