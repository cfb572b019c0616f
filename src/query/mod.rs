//! Query execution and schema diagnostics.

pub mod executor;
pub mod introspect;

pub use executor::{Outcome, QueryExecutor, QueryOutcome};
pub use introspect::SchemaIntrospector;
