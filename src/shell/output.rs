//! Output produced by shell commands and CLI subcommands.

use serde::Serialize;

use crate::db::QueryResult;
use crate::error::{ExplorerError, Result};
use crate::render::{to_json, ResultTable};

/// Output from a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Informational message.
    Info(String),

    /// Error message.
    Error(String),

    /// A titled result table.
    Table { title: String, result: QueryResult },

    /// Several outputs in order.
    Multiple(Vec<CommandOutput>),

    /// Leave the shell.
    Exit,
}

/// JSON form of one output.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum JsonOutput<'a> {
    Info(&'a str),
    Error(&'a str),
    Table {
        title: &'a str,
        result: &'a QueryResult,
    },
}

impl CommandOutput {
    /// Creates an info message.
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    /// Creates an error message.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Creates an error message from an error value.
    pub fn from_error(error: &ExplorerError) -> Self {
        Self::Error(error.to_string())
    }

    /// Creates a table output.
    pub fn table(title: impl Into<String>, result: QueryResult) -> Self {
        Self::Table {
            title: title.into(),
            result,
        }
    }

    /// Returns true if this output, or any nested one, is an error.
    pub fn has_error(&self) -> bool {
        match self {
            Self::Error(_) => true,
            Self::Multiple(outputs) => outputs.iter().any(Self::has_error),
            _ => false,
        }
    }

    /// Renders as text, showing at most `max_rows` rows per table.
    pub fn to_text(&self, max_rows: usize) -> String {
        match self {
            Self::Info(msg) => msg.clone(),
            Self::Error(msg) => format!("error: {msg}"),
            Self::Table { title, result } => {
                format!("{title}\n{}", ResultTable::new(result, max_rows).render())
            }
            Self::Multiple(outputs) => outputs
                .iter()
                .map(|o| o.to_text(max_rows))
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n\n"),
            Self::Exit => String::new(),
        }
    }

    /// Renders as a pretty JSON array of outputs.
    pub fn to_json(&self) -> Result<String> {
        let mut flat = Vec::new();
        self.collect_json(&mut flat);
        to_json(&flat)
    }

    fn collect_json<'a>(&'a self, out: &mut Vec<JsonOutput<'a>>) {
        match self {
            Self::Info(msg) => out.push(JsonOutput::Info(msg)),
            Self::Error(msg) => out.push(JsonOutput::Error(msg)),
            Self::Table { title, result } => out.push(JsonOutput::Table { title, result }),
            Self::Multiple(outputs) => outputs.iter().for_each(|o| o.collect_json(out)),
            Self::Exit => {}
        }
    }
}
