//! Strategy that indexes a 512-entry table.

use super::{Strategy, WinChecker};
use crate::board::OCCUPANCY_BITS;
use crate::WinTables;
use std::sync::Arc;
use tracing::instrument;

/// One array index per query, no hashing.
#[derive(Debug, Clone)]
pub struct DirectLookup {
    tables: Arc<WinTables>,
}

impl DirectLookup {
    /// Uses the lookup table from `tables`.
    #[instrument(skip(tables))]
    pub fn new(tables: Arc<WinTables>) -> Self {
        Self { tables }
    }
}

impl WinChecker for DirectLookup {
    fn strategy(&self) -> Strategy {
        Strategy::DirectLookup
    }

    fn wins(&self, occupancy: u16) -> bool {
        // Masked to 9 bits, so always in bounds.
        self.tables.lookup()[usize::from(occupancy & OCCUPANCY_BITS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_column_wins() {
        let checker = DirectLookup::new(WinTables::shared());
        assert!(checker.wins(0b010_010_010));
    }

    #[test]
    fn test_empty_does_not_win() {
        let checker = DirectLookup::new(WinTables::shared());
        assert!(!checker.wins(0));
    }

    #[test]
    fn test_out_of_range_occupancy_is_masked() {
        let checker = DirectLookup::new(WinTables::shared());
        assert!(!checker.wins(0xfe00 | 0b011));
        assert!(checker.wins(u16::MAX));
    }
}
