//! Strictly Wins CLI library
//!
//! A thin caller around `strictly_wins`: parses grids from text, loads
//! configuration and renders reports. The binary in `main.rs` wires these
//! to the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod grid;
mod report;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Commands
pub use commands::{Comparison, check, compare, masks};

// Crate-level exports - Configuration
pub use config::{CliConfig, ConfigError};

// Crate-level exports - Input and output
pub use grid::{GridParseError, parse_grid};
pub use report::CheckReport;
