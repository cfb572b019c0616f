//! Line-oriented interactive shell.
//!
//! Each line is parsed into a `ShellCommand`, dispatched against the
//! `Explorer`, and printed. The shell owns no data logic.

mod command;
mod output;

pub use command::ShellCommand;
pub use output::CommandOutput;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::app::Explorer;
use crate::catalog::{self, Tab, KNOWN_CLASSIFICATIONS};
use crate::db::QueryResult;
use crate::error::{ExplorerError, Result};
use crate::query::{Outcome, QueryOutcome};

/// Help text displayed for the help command.
const HELP_TEXT: &str = r#"Available commands:
  queries [tab]          - List canned queries (optionally one tab)
  run <name> [param]     - Run a canned query; colors-for-artifact takes an artifact id
  sql <query>            - Run read-only SQL
  tables                 - List user tables
  sample <table>         - Show the first row of a table
  collect <class>        - Fetch synthetic records for a classification
  peek                   - Show the collected batch
  insert                 - Append the collected batch (keeps it collected)
  insert-clear           - Append the collected batch, then drop it
  help                   - Show this help message
  quit, exit             - Leave the shell"#;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    /// Print JSON instead of tables.
    pub json: bool,
    /// Row cap per rendered table.
    pub max_rows: usize,
}

impl Printer {
    /// Renders an output for stdout.
    pub fn render(&self, output: &CommandOutput) -> Result<String> {
        if self.json {
            output.to_json()
        } else {
            Ok(output.to_text(self.max_rows))
        }
    }
}

/// Runs one parsed command.
pub async fn execute(explorer: &mut Explorer, command: ShellCommand) -> CommandOutput {
    match command {
        ShellCommand::Empty => CommandOutput::Multiple(Vec::new()),
        ShellCommand::Help => CommandOutput::info(HELP_TEXT),
        ShellCommand::Queries(tab) => match tab.as_deref().map(str::parse::<Tab>).transpose() {
            Ok(tab) => list_queries(tab),
            Err(e) => CommandOutput::error(e),
        },
        ShellCommand::Run { name, param } => {
            if name.is_empty() {
                return CommandOutput::error("Usage: run <name> [param]");
            }
            let outcome = explorer.run_query(&name, param.as_deref()).await;
            query_output(&name, outcome)
        }
        ShellCommand::Sql(sql) => {
            if sql.is_empty() {
                return CommandOutput::error("Usage: sql <query>");
            }
            let outcome = explorer.run_query(&sql, None).await;
            query_output("SQL", outcome)
        }
        ShellCommand::Tables => tables_output(explorer.list_tables().await),
        ShellCommand::Sample(table) => {
            if table.is_empty() {
                return CommandOutput::error("Usage: sample <table>");
            }
            let outcome = explorer.sample_row(&table).await;
            query_output(&table, outcome)
        }
        ShellCommand::Collect(classification) => {
            if classification.is_empty() {
                return CommandOutput::error(format!(
                    "Usage: collect <classification> (e.g. {})",
                    KNOWN_CLASSIFICATIONS.join(", ")
                ));
            }
            match explorer.collect_data(&classification).await {
                Ok(count) => CommandOutput::info(format!(
                    "Collected {count} '{classification}' records. Use 'peek' to review or 'insert' to save."
                )),
                Err(e) => CommandOutput::from_error(&e),
            }
        }
        ShellCommand::Peek => peek_output(explorer.peek_data()),
        ShellCommand::Insert => insert_output(explorer.insert_data().await),
        ShellCommand::InsertClear => insert_output(explorer.insert_data_and_clear().await),
        ShellCommand::Quit => CommandOutput::Exit,
        ShellCommand::Unknown(word) => CommandOutput::error(format!(
            "Unknown command '{word}'. Type 'help' for available commands."
        )),
    }
}

/// Lists catalog queries grouped by tab.
pub fn list_queries(tab: Option<Tab>) -> CommandOutput {
    let tabs: Vec<Tab> = match tab {
        Some(tab) => vec![tab],
        None => Tab::ALL.to_vec(),
    };

    let sections = tabs
        .into_iter()
        .map(|tab| {
            let lines: Vec<String> = catalog::for_tab(tab)
                .into_iter()
                .map(|q| {
                    let usage = match q.param {
                        Some(kind) => format!("{} <{}>", q.name, kind.label()),
                        None => q.name.to_string(),
                    };
                    format!("  {usage:<40} {}", q.title)
                })
                .collect();
            CommandOutput::info(format!("{} [{tab}]\n{}", tab.title(), lines.join("\n")))
        })
        .collect();
    CommandOutput::Multiple(sections)
}

/// A result table, preceded by the reported error when the query failed.
pub fn query_output(title: &str, outcome: QueryOutcome) -> CommandOutput {
    let title = catalog::lookup(title).map(|q| q.title).unwrap_or(title);
    let table = CommandOutput::table(title, outcome.value);
    match outcome.error {
        Some(e) => CommandOutput::Multiple(vec![CommandOutput::from_error(&e), table]),
        None => table,
    }
}

/// Numbered table listing.
pub fn tables_output(outcome: Outcome<Vec<String>>) -> CommandOutput {
    if let Some(e) = outcome.error {
        return CommandOutput::from_error(&e);
    }
    if outcome.value.is_empty() {
        return CommandOutput::info("No tables found.");
    }
    let lines: Vec<String> = outcome
        .value
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>3}. {name}", i + 1))
        .collect();
    CommandOutput::info(format!("Tables:\n{}", lines.join("\n")))
}

/// One table per sampled user table.
pub fn samples_output(outcome: Outcome<Vec<(String, QueryResult)>>) -> CommandOutput {
    let mut outputs: Vec<CommandOutput> = outcome
        .value
        .into_iter()
        .map(|(table, sample)| CommandOutput::table(table, sample))
        .collect();
    if let Some(e) = outcome.error {
        outputs.insert(0, CommandOutput::from_error(&e));
    }
    CommandOutput::Multiple(outputs)
}

/// The held batch, or a hint when nothing is held.
pub fn peek_output(batch: QueryResult) -> CommandOutput {
    if batch.is_empty() {
        CommandOutput::info("Nothing collected yet.")
    } else {
        CommandOutput::table("Collected records", batch)
    }
}

/// Outcome of an insert.
pub fn insert_output(result: Result<u64>) -> CommandOutput {
    match result {
        Ok(count) => CommandOutput::info(format!(
            "Inserted {count} records into artifact_classification."
        )),
        Err(e) => CommandOutput::from_error(&e),
    }
}

/// Reads commands from stdin until `quit` or end of input.
pub async fn run(explorer: &mut Explorer, printer: Printer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("Artifact explorer shell. Type 'help' for commands.");

    loop {
        print!("explorer> ");
        std::io::stdout()
            .flush()
            .map_err(|e| ExplorerError::internal(format!("Failed to write prompt: {e}")))?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(ExplorerError::internal(format!("Failed to read input: {e}"))),
        };

        let command = ShellCommand::parse(&line);
        debug!("Shell command: {command:?}");
        let output = execute(explorer, command).await;
        if output == CommandOutput::Exit {
            break;
        }

        let rendered = printer.render(&output)?;
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }

    Ok(())
}
