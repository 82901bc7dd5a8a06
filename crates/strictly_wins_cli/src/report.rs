//! Human and JSON output for the `check` command.

use serde::Serialize;
use std::fmt;
use strictly_wins::{Board, Player, Strategy, WinChecker, winners};

/// Outcome of checking one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Rows of the decoded board, top to bottom.
    pub rows: Vec<String>,
    /// Packed board value.
    pub bits: u32,
    /// Strategy that answered.
    pub strategy: Strategy,
    /// Players that were checked.
    pub checked: Vec<Player>,
    /// Players with a complete line.
    pub winners: Vec<Player>,
}

impl CheckReport {
    /// Checks both players.
    pub fn new(board: Board, checker: &dyn WinChecker) -> Self {
        Self::build(board, checker, vec![Player::X, Player::O], winners(checker, board))
    }

    /// Checks a single player.
    pub fn for_player(board: Board, checker: &dyn WinChecker, player: Player) -> Self {
        let winners = if checker.is_winner_player(board, player) {
            vec![player]
        } else {
            Vec::new()
        };
        Self::build(board, checker, vec![player], winners)
    }

    fn build(
        board: Board,
        checker: &dyn WinChecker,
        checked: Vec<Player>,
        winners: Vec<Player>,
    ) -> Self {
        Self {
            rows: board.to_string().lines().map(str::to_string).collect(),
            bits: board.bits(),
            strategy: checker.strategy(),
            checked,
            winners,
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f, "board: {:#010x} ({:032b})", self.bits, self.bits)?;
        writeln!(f, "strategy: {}", self.strategy)?;
        for player in &self.checked {
            let verdict = if self.winners.contains(player) {
                "wins"
            } else {
                "has no line"
            };
            writeln!(f, "{}: {}", player, verdict)?;
        }
        Ok(())
    }
}
