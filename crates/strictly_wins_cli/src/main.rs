//! Strictly Wins - command-line front end
//!
//! Checks tic-tac-toe boards for winning lines.

#![warn(missing_docs)]

use anyhow::{Result, bail};
use clap::Parser;
use strictly_wins::WinTables;
use strictly_wins_cli::{Cli, CliConfig, Command, check, compare, masks};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration loaded");
    let tables = WinTables::shared();

    match cli.command {
        Command::Check {
            grid,
            strategy,
            player,
            json,
        } => {
            let config = config.with_strategy(strategy);
            let report = check(&config, tables, &grid, player)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
        Command::Masks => print!("{}", masks(&tables)),
        Command::Compare => {
            let comparison = compare(tables);
            info!(grids = comparison.grids, "Comparison complete");
            println!(
                "grids: {}, with a winner: {}, disagreements: {}",
                comparison.grids,
                comparison.wins,
                comparison.disagreements.len()
            );
            if !comparison.disagreements.is_empty() {
                bail!(
                    "strategies disagree on {} boards",
                    comparison.disagreements.len()
                );
            }
        }
    }

    Ok(())
}
