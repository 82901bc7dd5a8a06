//! Implementations of the CLI subcommands.

use crate::config::CliConfig;
use crate::grid::parse_grid;
use crate::report::CheckReport;
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;
use strictly_wins::{Board, Grid, Player, Strategy, WinChecker, WinTables};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Encodes `grid` and checks it with the configured strategy.
///
/// With `player` set, only that marker is checked; a marker other than
/// X or O is an error.
#[instrument(skip(config, tables), fields(strategy = %config.strategy()))]
pub fn check(
    config: &CliConfig,
    tables: Arc<WinTables>,
    grid: &str,
    player: Option<char>,
) -> Result<CheckReport> {
    let grid = parse_grid(grid).with_context(|| format!("Invalid grid {:?}", grid))?;
    let board = Board::encode(&grid);
    if !board.is_well_formed() {
        warn!(bits = board.bits(), "Encoded board is malformed");
    }

    let checker = config.strategy().checker(tables);
    let report = match player {
        Some(marker) => {
            let byte = u8::try_from(marker)
                .map_err(|_| anyhow!("player must be X or O, not {:?}", marker))?;
            let player = Player::from_marker(byte)?;
            CheckReport::for_player(board, checker.as_ref(), player)
        }
        None => CheckReport::new(board, checker.as_ref()),
    };

    info!(winners = ?report.winners, "Board checked");
    Ok(report)
}

/// Lists the winning lines and the size of the expanded win set.
#[instrument(skip(tables))]
pub fn masks(tables: &WinTables) -> String {
    let mut out = String::new();
    for (index, mask) in tables.masks().iter().enumerate() {
        let cells: Vec<String> = mask.cells().map(|cell| cell.to_string()).collect();
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}: {:09b} cells {}",
            index,
            mask.bits(),
            cells.join(",")
        );
    }
    let _ = writeln!(out, "winning occupancies: {}", tables.set().len());
    out
}

/// Result of running every strategy over every grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Grids checked.
    pub grids: usize,
    /// Grids where X or O has a line.
    pub wins: usize,
    /// Packed boards on which the strategies disagreed.
    pub disagreements: Vec<u32>,
}

/// Runs all strategies over every grid of empty, X and O cells.
#[instrument(skip(tables))]
pub fn compare(tables: Arc<WinTables>) -> Comparison {
    let checkers: Vec<Box<dyn WinChecker>> = Strategy::iter()
        .map(|strategy| strategy.checker(Arc::clone(&tables)))
        .collect();

    let mut comparison = Comparison {
        grids: 0,
        wins: 0,
        disagreements: Vec::new(),
    };
    for grid in all_grids() {
        let board = Board::encode(&grid);
        let answers: Vec<Vec<Player>> = checkers
            .iter()
            .map(|checker| strictly_wins::winners(checker.as_ref(), board))
            .collect();
        if answers.windows(2).any(|pair| pair[0] != pair[1]) {
            warn!(bits = board.bits(), ?answers, "Strategies disagree");
            comparison.disagreements.push(board.bits());
        }
        if !answers[0].is_empty() {
            comparison.wins += 1;
        }
        comparison.grids += 1;
    }
    debug!(?comparison, "Comparison finished");
    comparison
}

/// Every 3x3 grid over `.`, `X` and `O`.
fn all_grids() -> impl Iterator<Item = Grid> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut grid = [[b'.'; 3]; 3];
        for cell in grid.iter_mut().flatten() {
            *cell = match code % 3 {
                0 => b'.',
                1 => b'X',
                _ => b'O',
            };
            code /= 3;
        }
        grid
    })
}
