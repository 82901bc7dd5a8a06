//! Packed board representation and the grid encoder.
//!
//! A [`Board`] is a `u32`. Bits 0-8 hold the cells occupied by O and bits
//! 16-24 hold the cells occupied by X, one bit per cell at `row * 3 + col`.
//! Everything else is zero on a board produced by [`Board::encode`].

use crate::{Grid, Player, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Mask selecting one player's 9-bit occupancy field.
pub const OCCUPANCY_BITS: u16 = 0x01ff;

//                               X field           O field
const UNUSED_BITS: u32 = 0b1111_1110_0000_0000_1111_1110_0000_0000;

/// Encoded state of every cell for both players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::From,
)]
pub struct Board(u32);

impl Board {
    /// Board with no squares occupied.
    pub const EMPTY: Board = Board(0);

    /// Wraps a packed value as-is. The value is not validated.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the packed value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Encodes a grid of markers.
    ///
    /// Markers are matched case-insensitively; anything other than X or O
    /// leaves the cell empty.
    #[instrument(level = "debug")]
    pub fn encode(grid: &Grid) -> Self {
        let mut bits = 0u32;
        for (row, cells) in grid.iter().enumerate() {
            for (col, &marker) in cells.iter().enumerate() {
                if let Square::Occupied(player) = Square::from_marker(marker) {
                    let index = (row * 3 + col) as u32;
                    bits |= 1 << (index + player.shift());
                }
            }
        }
        debug!(bits, "Encoded grid");
        Self(bits)
    }

    /// Returns the 9-bit occupancy field for `player`.
    ///
    /// Bits outside the player's field are ignored.
    pub const fn occupancy(self, player: Player) -> u16 {
        ((self.0 >> player.shift()) as u16) & OCCUPANCY_BITS
    }

    /// Decodes a single cell (0-8).
    ///
    /// On a malformed board with both players on one cell, X is reported.
    pub fn square(self, index: usize) -> Option<Square> {
        if index >= CELLS {
            return None;
        }
        let bit = 1u16 << index;
        let square = if self.occupancy(Player::X) & bit != 0 {
            Square::Occupied(Player::X)
        } else if self.occupancy(Player::O) & bit != 0 {
            Square::Occupied(Player::O)
        } else {
            Square::Empty
        };
        Some(square)
    }

    /// Decodes the board back into uppercase markers, `.` for empty cells.
    pub fn to_grid(self) -> Grid {
        let mut grid = [[b'.'; 3]; 3];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self
                    .square(row * 3 + col)
                    .unwrap_or_default()
                    .marker();
            }
        }
        grid
    }

    /// Whether the unused bits are clear and no cell is claimed twice.
    ///
    /// Boards from [`Board::encode`] always are. Checkers never call this.
    pub const fn is_well_formed(self) -> bool {
        self.0 & UNUSED_BITS == 0 && self.occupancy(Player::X) & self.occupancy(Player::O) == 0
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self::encode(&grid)
    }
}

impl From<Board> for u32 {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.to_grid().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in cells {
                write!(f, "{}", char::from(cell))?;
            }
        }
        Ok(())
    }
}

impl fmt::Binary for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032b}", self.0)
    }
}

/// Encodes a grid of markers into a [`Board`].
pub fn encode(grid: &Grid) -> Board {
    Board::encode(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_encodes_to_zero() {
        assert_eq!(Board::encode(&[[b'.'; 3]; 3]), Board::EMPTY);
        assert_eq!(Board::encode(&[[0; 3]; 3]).bits(), 0);
    }

    #[test]
    fn test_cell_bit_positions() {
        let board = Board::encode(&[[b'X', 0, 0], [0, 0, 0], [0, 0, b'O']]);
        assert_eq!(board.bits(), (1 << 16) | (1 << 8));
    }

    #[test]
    fn test_occupancy_extracts_each_field() {
        let board = Board::encode(&[[b'x', b'o', 0], [0, b'x', 0], [b'o', 0, b'x']]);
        assert_eq!(board.occupancy(Player::X), 0b100_010_001);
        assert_eq!(board.occupancy(Player::O), 0b001_000_010);
    }

    #[test]
    fn test_occupancy_ignores_unused_bits() {
        let board = Board::from_bits(0xfe00_fe00 | (1 << 20) | 1);
        assert_eq!(board.occupancy(Player::X), 1 << 4);
        assert_eq!(board.occupancy(Player::O), 1);
        assert!(!board.is_well_formed());
    }

    #[test]
    fn test_overlapping_cell_is_malformed() {
        let board = Board::from_bits((1 << 16) | 1);
        assert!(!board.is_well_formed());
        assert_eq!(board.square(0), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_encoded_boards_are_well_formed() {
        let board = Board::encode(&[[b'x', b'o', b'x'], [b'o', b'x', b'o'], [b'o', b'x', b'o']]);
        assert!(board.is_well_formed());
    }

    #[test]
    fn test_to_grid_decodes_markers() {
        let grid = [[b'x', b'?', b'O'], [0, b'X', 0], [b'o', 0, 0]];
        let board = Board::encode(&grid);
        assert_eq!(
            board.to_grid(),
            [[b'X', b'.', b'O'], [b'.', b'X', b'.'], [b'O', b'.', b'.']]
        );
        assert_eq!(board.square(9), None);
    }

    #[test]
    fn test_display_renders_three_rows() {
        let board = Board::encode(&[[b'x', 0, 0], [0, b'o', 0], [0, 0, b'x']]);
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }

    #[test]
    fn test_binary_is_zero_padded() {
        let board = Board::from_bits(1);
        assert_eq!(format!("{board:b}"), format!("{}1", "0".repeat(31)));
    }
}
