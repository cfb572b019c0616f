//! Shell line parsing.

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Blank line.
    Empty,
    /// Show help message.
    Help,
    /// List the catalog, optionally one tab.
    Queries(Option<String>),
    /// Run a catalog query with an optional parameter.
    Run { name: String, param: Option<String> },
    /// Run read-only SQL text.
    Sql(String),
    /// List user tables.
    Tables,
    /// Show the first row of a table.
    Sample(String),
    /// Collect records for a classification.
    Collect(String),
    /// Show the held batch.
    Peek,
    /// Append the held batch.
    Insert,
    /// Append the held batch, then drop it.
    InsertClear,
    /// Leave the shell.
    Quit,
    /// Unrecognized command word.
    Unknown(String),
}

impl ShellCommand {
    /// Parses one input line. Arguments keep their inner spacing.
    pub fn parse(input: &str) -> ShellCommand {
        let input = input.trim();
        if input.is_empty() {
            return ShellCommand::Empty;
        }

        let (command, args) = match input.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (input, ""),
        };

        match command.to_lowercase().as_str() {
            "help" | "?" => ShellCommand::Help,
            "queries" => ShellCommand::Queries(non_empty(args)),
            "run" => match args.split_once(char::is_whitespace) {
                Some((name, param)) => ShellCommand::Run {
                    name: name.to_string(),
                    param: non_empty(param.trim()),
                },
                None => ShellCommand::Run {
                    name: args.to_string(),
                    param: None,
                },
            },
            "sql" => ShellCommand::Sql(args.to_string()),
            "tables" => ShellCommand::Tables,
            "sample" => ShellCommand::Sample(args.to_string()),
            "collect" => ShellCommand::Collect(args.to_string()),
            "peek" => ShellCommand::Peek,
            "insert" => ShellCommand::Insert,
            "insert-clear" => ShellCommand::InsertClear,
            "quit" | "exit" => ShellCommand::Quit,
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
