//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::Tab;
use crate::config::{Config, DB_PATH_ENV};

/// Browse canned queries over a museum artifact database and simulate
/// ingesting classification records.
#[derive(Parser, Debug)]
#[command(name = "artifact-explorer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite artifact database
    #[arg(long, value_name = "PATH", env = DB_PATH_ENV, global = true)]
    pub db: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the query catalog
    Queries {
        /// Only show one tab
        #[arg(long, value_name = "TAB")]
        tab: Option<Tab>,
    },

    /// Run a catalog query by name, or read-only SQL
    Run {
        /// Catalog name or SQL text
        #[arg(value_name = "NAME|SQL")]
        query: String,

        /// Value for a parameterized query (e.g. an artifact id)
        #[arg(long, value_name = "VALUE")]
        param: Option<String>,
    },

    /// List user tables
    Tables {
        /// Also show the first row of each table
        #[arg(long)]
        samples: bool,
    },

    /// Collect synthetic records for a classification and append them
    Ingest {
        /// Classification tag, e.g. Coins
        #[arg(value_name = "CLASSIFICATION")]
        classification: String,

        /// Collect and preview without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Start an interactive session
    Shell,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }
}
