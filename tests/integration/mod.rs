//! Integration tests for the artifact explorer.
//!
//! Each test provisions its own SQLite file in a temporary directory.

pub mod common;

pub mod catalog_test;
pub mod ingest_test;
pub mod introspect_test;
