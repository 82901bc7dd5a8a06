//! Strictly Wins - bit-packed tic-tac-toe win detection
//!
//! Encodes a 3x3 grid into a single `u32` and answers whether a player
//! has completed a line.
//!
//! # Architecture
//!
//! - **Encoder**: [`Board::encode`] packs a [`Grid`] of marker bytes
//! - **Masks**: [`generate_win_masks`] yields the 8 winning lines;
//!   [`expand_to_set`] and [`expand_to_lookup`] derive every winning occupancy
//! - **Tables**: [`WinTables`] holds the precomputed structures, built once
//! - **Checkers**: [`MaskScan`], [`SetMembership`] and [`DirectLookup`]
//!   implement [`WinChecker`] and always agree
//!
//! # Example
//!
//! ```
//! use strictly_wins::{Board, Strategy, WinChecker, WinTables};
//!
//! let board = Board::encode(&[*b"o..", *b".o.", *b"..o"]);
//! let checker = Strategy::MaskScan.checker(WinTables::shared());
//!
//! assert_eq!(checker.is_winner(board, b'O'), Ok(true));
//! assert_eq!(checker.is_winner(board, b'x'), Ok(false));
//! assert!(checker.is_winner(board, b'?').is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod checker;
mod error;
mod masks;
mod tables;
mod types;

// Crate-level exports - Encoding
pub use board::{Board, CELLS, OCCUPANCY_BITS, encode};

// Crate-level exports - Domain types
pub use types::{Grid, Player, Square};

// Crate-level exports - Masks and tables
pub use masks::{
    LOOKUP_SIZE, WIN_MASKS, WinMask, expand_to_lookup, expand_to_set, generate_win_masks,
};
pub use tables::WinTables;

// Crate-level exports - Checkers
pub use checker::{
    DirectLookup, MaskScan, SetMembership, Strategy, WinChecker, is_winner, winners,
};

// Crate-level exports - Errors
pub use error::WinError;
