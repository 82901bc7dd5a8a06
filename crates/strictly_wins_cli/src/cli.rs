//! Command-line interface for strictly_wins.

use clap::{Parser, Subcommand};
use strictly_wins::Strategy;

/// Strictly Wins - tic-tac-toe win detection over packed boards
#[derive(Parser, Debug)]
#[command(name = "strictly-wins")]
#[command(about = "Check tic-tac-toe boards for a winning line", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a grid and report which players have a line
    Check {
        /// Three rows of three cells separated by '/', e.g. "xo./.x./..x"
        #[arg(short, long)]
        grid: String,

        /// Win detection strategy (overrides the config file)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Only check this player's marker (X or O)
        #[arg(short, long)]
        player: Option<char>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the 8 winning lines and the size of the win set
    Masks,

    /// Run every strategy over all 3^9 grids and report disagreements
    Compare,
}
