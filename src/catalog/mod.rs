//! Canned query catalog.
//!
//! A fixed set of named, read-only query definitions grouped by tab. Limits
//! and sort orders live in the SQL and are not caller-configurable.

mod queries;

pub use queries::CATALOG;

use crate::db::Value;
use crate::error::{ExplorerError, Result};
use std::fmt;
use std::str::FromStr;

/// Classifications offered by the ingestion picker. Any string is accepted.
pub const KNOWN_CLASSIFICATIONS: &[&str] =
    &["Coins", "Paintings", "Scriptures", "Jewellery", "Drawings"];

/// Dashboard tab a query belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Queries over `artifact_metadata`.
    Metadata,
    /// Queries over `artifact_media`.
    Media,
    /// Queries over `artifact_colors`.
    Colors,
    /// Cross-table joins.
    Joins,
    /// The ingestion/classification explorer.
    Classification,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Metadata,
        Tab::Media,
        Tab::Colors,
        Tab::Joins,
        Tab::Classification,
    ];

    /// Short lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metadata => "metadata",
            Self::Media => "media",
            Self::Colors => "colors",
            Self::Joins => "joins",
            Self::Classification => "classification",
        }
    }

    /// Heading shown above the tab's queries.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Metadata => "Artifact Metadata",
            Self::Media => "Artifact Media",
            Self::Colors => "Artifact Colors",
            Self::Joins => "Join-Based Queries",
            Self::Classification => "Classification Explorer",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid tab: {s}. Expected one of: {}",
                    Tab::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

/// Kind of the single positional parameter a query accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-text artifact identifier, matched against `objectid`.
    ArtifactId,
}

impl ParamKind {
    /// Label used in prompts and usage lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ArtifactId => "artifact id",
        }
    }

    /// Turns user input into a bound value.
    ///
    /// Always text: column affinity converts it for INTEGER and REAL columns,
    /// and an untyped column holding text ids still matches.
    pub fn bind(&self, raw: &str) -> Result<Value> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ExplorerError::query(format!("Enter an {}", self.label())));
        }
        Ok(Value::from(raw))
    }
}

/// A named, read-only query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDef {
    /// Lookup key.
    pub name: &'static str,
    /// Heading shown with the result.
    pub title: &'static str,
    /// Owning tab.
    pub tab: Tab,
    /// SQL text; a parameterized query uses `?1`.
    pub sql: &'static str,
    /// Parameter accepted, if any.
    pub param: Option<ParamKind>,
}

impl QueryDef {
    /// Builds the positional parameter list for this query.
    ///
    /// A missing required parameter or an unexpected one is a query error.
    pub fn bind(&self, raw: Option<&str>) -> Result<Vec<Value>> {
        match (self.param, raw) {
            (None, None) => Ok(Vec::new()),
            (Some(kind), Some(raw)) => Ok(vec![kind.bind(raw)?]),
            (Some(kind), None) => Err(ExplorerError::query(format!(
                "Query '{}' needs an {}",
                self.name,
                kind.label()
            ))),
            (None, Some(_)) => Err(ExplorerError::query(format!(
                "Query '{}' takes no parameter",
                self.name
            ))),
        }
    }
}

/// Looks up a query by name.
pub fn lookup(name: &str) -> Option<&'static QueryDef> {
    let name = name.trim();
    CATALOG.iter().find(|q| q.name == name)
}

/// Queries shown on a tab, in display order.
///
/// The classification tab reuses two queries owned by other tabs.
pub fn for_tab(tab: Tab) -> Vec<&'static QueryDef> {
    match tab {
        Tab::Classification => [
            "artifacts-1500-1600",
            "top-10-grey",
            "average-coverage-by-hue",
            "ingested-per-classification",
        ]
        .iter()
        .filter_map(|name| lookup(name))
        .collect(),
        _ => CATALOG.iter().filter(|q| q.tab == tab).collect(),
    }
}
