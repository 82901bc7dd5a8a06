//! Parsing grids from command-line text.

use derive_more::{Display, Error};
use strictly_wins::Grid;
use tracing::instrument;

/// A grid string with the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// Not exactly three rows.
    #[display("expected 3 rows, found {count}")]
    RowCount {
        /// Rows found.
        count: usize,
    },
    /// A row without exactly three cells.
    #[display("row {row} has {len} cells, expected 3")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Cells found in the row.
        len: usize,
    },
}

/// Parses three rows of three cells separated by `/` or newlines.
///
/// Cells are single bytes; anything other than X or O is empty.
#[instrument]
pub fn parse_grid(input: &str) -> Result<Grid, GridParseError> {
    let rows: Vec<&str> = input
        .trim_end_matches(['\r', '\n'])
        .split(['/', '\n'])
        .map(|row| row.trim_end_matches('\r'))
        .collect();
    if rows.len() != 3 {
        return Err(GridParseError::RowCount { count: rows.len() });
    }

    let mut grid = [[b'.'; 3]; 3];
    for (row, (cells, text)) in grid.iter_mut().zip(&rows).enumerate() {
        *cells = text
            .as_bytes()
            .try_into()
            .map_err(|_| GridParseError::RowLength {
                row,
                len: text.len(),
            })?;
    }
    Ok(grid)
}
