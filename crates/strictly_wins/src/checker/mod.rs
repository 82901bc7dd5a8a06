//! Win detection strategies.
//!
//! Three interchangeable implementations of the same predicate: does a
//! player's occupancy contain a complete line? They differ only in what
//! they precompute and how much a query costs.

mod direct_lookup;
mod mask_scan;
mod set_membership;

pub use direct_lookup::DirectLookup;
pub use mask_scan::MaskScan;
pub use set_membership::SetMembership;

use crate::{Board, Player, WinError, WinTables};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Answers whether a player has completed a line.
pub trait WinChecker: Send + Sync + std::fmt::Debug {
    /// Which strategy this checker implements.
    fn strategy(&self) -> Strategy;

    /// Whether a 9-bit occupancy field contains a winning line.
    ///
    /// Bits above bit 8 are ignored.
    fn wins(&self, occupancy: u16) -> bool;

    /// Checks `player`'s occupancy on `board`.
    fn is_winner_player(&self, board: Board, player: Player) -> bool {
        self.wins(board.occupancy(player))
    }

    /// Checks the player named by `marker` (`X` or `O`, any case).
    ///
    /// Any other marker is a caller error and yields
    /// [`WinError::InvalidMarker`].
    #[instrument(level = "trace", skip(self), fields(strategy = %self.strategy()))]
    fn is_winner(&self, board: Board, marker: u8) -> Result<bool, WinError> {
        let player = Player::from_marker(marker)?;
        Ok(self.is_winner_player(board, player))
    }
}

/// Selects a [`WinChecker`] implementation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Compare the occupancy against each of the 8 lines.
    MaskScan,
    /// Look the occupancy up in the set of winning values.
    SetMembership,
    /// Index the 512-entry winning table.
    #[default]
    DirectLookup,
}

impl Strategy {
    /// Builds a checker for this strategy over `tables`.
    #[instrument(skip(tables))]
    pub fn checker(self, tables: Arc<WinTables>) -> Box<dyn WinChecker> {
        match self {
            Strategy::MaskScan => Box::new(MaskScan::new(tables)),
            Strategy::SetMembership => Box::new(SetMembership::new(tables)),
            Strategy::DirectLookup => Box::new(DirectLookup::new(tables)),
        }
    }
}

/// Every player `checker` reports as having a line on `board`.
pub fn winners(checker: &dyn WinChecker, board: Board) -> Vec<Player> {
    Player::iter()
        .filter(|&player| checker.is_winner_player(board, player))
        .collect()
}

/// Checks `marker` on `board` with the shared direct-lookup tables.
pub fn is_winner(board: Board, marker: u8) -> Result<bool, WinError> {
    DirectLookup::new(WinTables::shared()).is_winner(board, marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::MaskScan.to_string(), "mask-scan");
        assert_eq!(Strategy::SetMembership.to_string(), "set-membership");
        assert_eq!(Strategy::DirectLookup.to_string(), "direct-lookup");
        assert_eq!(
            Strategy::from_str("set-membership"),
            Ok(Strategy::SetMembership)
        );
        assert!(Strategy::from_str("brute-force").is_err());
    }

    #[test]
    fn test_strategy_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Settings {
            strategy: Strategy,
        }

        let settings: Settings = toml::from_str("strategy = \"mask-scan\"").unwrap();
        assert_eq!(settings.strategy, Strategy::MaskScan);
        assert!(toml::from_str::<Settings>("strategy = \"MaskScan\"").is_err());
    }

    #[test]
    fn test_default_strategy() {
        assert_eq!(Strategy::default(), Strategy::DirectLookup);
    }

    #[test]
    fn test_checker_reports_its_strategy() {
        let tables = WinTables::shared();
        for strategy in Strategy::iter() {
            assert_eq!(strategy.checker(Arc::clone(&tables)).strategy(), strategy);
        }
    }

    #[test]
    fn test_winners_lists_both_on_malformed_board() {
        let board = Board::from_bits((0b111 << 16) | 0b111_000_000);
        let checker = Strategy::MaskScan.checker(WinTables::shared());
        assert_eq!(winners(checker.as_ref(), board), vec![Player::X, Player::O]);
    }

    #[test]
    fn test_free_is_winner() {
        let board = Board::encode(&[[b'x', b'x', b'x'], [0; 3], [0; 3]]);
        assert_eq!(is_winner(board, b'X'), Ok(true));
        assert_eq!(is_winner(board, b'o'), Ok(false));
        assert_eq!(is_winner(board, b'-'), Err(WinError::InvalidMarker(b'-')));
    }
}
