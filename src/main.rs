//! Artifact explorer command-line front end.

use artifact_explorer::app::Explorer;
use artifact_explorer::cli::{Cli, Command};
use artifact_explorer::config::Config;
use artifact_explorer::error::Result;
use artifact_explorer::logging;
use artifact_explorer::shell::{self, CommandOutput, Printer};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    logging::init_stderr_logging(cli.verbose);

    match run(cli).await {
        Ok((printer, output)) => match printer.render(&output) {
            Ok(rendered) => {
                if !rendered.is_empty() {
                    println!("{rendered}");
                }
                if output.has_error() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                error!("{}: {}", e.category(), e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            error!("{}: {}", e.category(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<(Printer, CommandOutput)> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?.with_db_override(cli.db.clone());

    let printer = Printer {
        json: cli.json,
        max_rows: config.display.max_rows,
    };

    let database = &config.database;
    let output = match cli.command {
        // Listing the catalog needs no database.
        Command::Queries { tab } => shell::list_queries(tab),
        Command::Run { query, param } => {
            let explorer = Explorer::open(database).await?;
            let outcome = explorer.run_query(&query, param.as_deref()).await;
            shell::query_output(&query, outcome)
        }
        Command::Tables { samples } => {
            let explorer = Explorer::open(database).await?;
            if samples {
                shell::samples_output(explorer.sample_all().await)
            } else {
                shell::tables_output(explorer.list_tables().await)
            }
        }
        Command::Ingest {
            classification,
            dry_run,
        } => {
            let mut explorer = Explorer::open(database).await?;
            let count = explorer.collect_data(&classification).await?;
            let collected =
                CommandOutput::info(format!("Collected {count} '{classification}' records."));
            if dry_run {
                CommandOutput::Multiple(vec![collected, shell::peek_output(explorer.peek_data())])
            } else {
                let inserted = shell::insert_output(explorer.insert_data_and_clear().await);
                CommandOutput::Multiple(vec![collected, inserted])
            }
        }
        Command::Shell => {
            let mut explorer = Explorer::open(database).await?;
            shell::run(&mut explorer, printer).await?;
            CommandOutput::Multiple(Vec::new())
        }
    };

    Ok((printer, output))
}
