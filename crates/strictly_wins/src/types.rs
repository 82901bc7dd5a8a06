//! Core domain types: players, squares and the human-readable grid.

use crate::WinError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A 3x3 grid of marker bytes in row-major order.
///
/// `X`/`x` marks the first player and `O`/`o` the second. Any other byte
/// is an empty square.
pub type Grid = [[u8; 3]; 3];

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parses a marker byte, ignoring case.
    #[instrument(level = "trace")]
    pub fn from_marker(marker: u8) -> Result<Self, WinError> {
        match marker {
            b'x' | b'X' => Ok(Player::X),
            b'o' | b'O' => Ok(Player::O),
            other => {
                warn!(marker = %char::from(other).escape_default(), "Rejected player marker");
                Err(WinError::InvalidMarker(other))
            }
        }
    }

    /// Uppercase marker byte for this player.
    pub fn marker(self) -> u8 {
        match self {
            Player::X => b'X',
            Player::O => b'O',
        }
    }

    /// Offset of this player's occupancy field within a packed board.
    pub(crate) const fn shift(self) -> u32 {
        match self {
            Player::X => 16,
            Player::O => 0,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = WinError;

    fn try_from(marker: u8) -> Result<Self, Self::Error> {
        Self::from_marker(marker)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Reads a grid cell. Unrecognized bytes are empty squares.
    pub fn from_marker(marker: u8) -> Self {
        match marker {
            b'x' | b'X' => Square::Occupied(Player::X),
            b'o' | b'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        }
    }

    /// Marker byte for display: `X`, `O` or `.`.
    pub fn marker(self) -> u8 {
        match self {
            Square::Empty => b'.',
            Square::Occupied(player) => player.marker(),
        }
    }
}
