//! Plain-text and JSON rendering of query results.
//!
//! Tables are drawn with box characters, auto-sized columns and a row-count
//! footer. Rendering holds no data logic; it only formats what it is given.

use serde::Serialize;

use crate::db::{QueryResult, Value};
use crate::error::{ExplorerError, Result};

/// Maximum width for any column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
const MIN_COLUMN_WIDTH: usize = 4;

/// Renders a result as a text table, showing at most `max_rows` rows.
pub struct ResultTable<'a> {
    result: &'a QueryResult,
    max_rows: usize,
}

impl<'a> ResultTable<'a> {
    /// Creates a new result table.
    pub fn new(result: &'a QueryResult, max_rows: usize) -> Self {
        Self { result, max_rows }
    }

    fn visible_rows(&self) -> &'a [Vec<Value>] {
        let end = self.result.rows.len().min(self.max_rows);
        &self.result.rows[..end]
    }

    /// Calculates the width for each column from the visible rows.
    fn calculate_column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .result
            .columns
            .iter()
            .map(|col| col.name.chars().count().max(MIN_COLUMN_WIDTH))
            .collect();

        for row in self.visible_rows() {
            for (width, value) in widths.iter_mut().zip(row) {
                *width = (*width).max(value.to_display_string().chars().count());
            }
        }

        widths.iter().map(|&w| w.min(MAX_COLUMN_WIDTH)).collect()
    }

    /// Truncates a string to fit within the given width, adding an ellipsis
    /// if needed.
    fn truncate(s: &str, max_width: usize) -> String {
        if s.chars().count() <= max_width {
            s.to_string()
        } else if max_width <= 3 {
            s.chars().take(max_width).collect()
        } else {
            let kept: String = s.chars().take(max_width - 3).collect();
            format!("{kept}...")
        }
    }

    /// Renders the table to lines.
    pub fn render_to_lines(&self) -> Vec<String> {
        if self.result.columns.is_empty() {
            return vec!["(empty result)".to_string()];
        }

        let widths = self.calculate_column_widths();
        let mut lines = Vec::new();

        lines.push(border(&widths, '┌', '┬', '┐'));
        let names: Vec<String> = self.result.columns.iter().map(|c| c.name.clone()).collect();
        lines.push(row_line(&names, &widths));
        lines.push(border(&widths, '├', '┼', '┤'));

        for row in self.visible_rows() {
            let cells: Vec<String> = row.iter().map(Value::to_display_string).collect();
            lines.push(row_line(&cells, &widths));
        }

        lines.push(border(&widths, '└', '┴', '┘'));

        let hidden = self.result.rows.len() - self.visible_rows().len();
        if hidden > 0 {
            lines.push(format!("... {hidden} more row{} not shown", plural(hidden)));
        }
        lines.push(format!(
            "{} row{} returned ({}ms)",
            self.result.row_count,
            plural(self.result.row_count),
            self.result.execution_time.as_millis()
        ));

        lines
    }

    /// Renders the table as one string.
    pub fn render(&self) -> String {
        self.render_to_lines().join("\n")
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|&w| "─".repeat(w + 2)).collect();
    let mid = mid.to_string();
    format!("{left}{}{right}", segments.join(mid.as_str()))
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let truncated = ResultTable::truncate(cell, width);
            format!(" {truncated:width$} ")
        })
        .collect();
    format!("│{}│", padded.join("│"))
}

/// Pretty JSON for anything serializable.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ExplorerError::internal(format!("Failed to encode JSON: {e}")))
}
