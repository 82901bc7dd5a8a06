//! Canonical winning lines and the structures derived from them.

use crate::board::CELLS;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Number of distinct single-player occupancy values.
pub const LOOKUP_SIZE: usize = 1 << CELLS;

// Cell 8 is the leftmost bit; each group of three is one row.
const BOTTOM_ROW: u16 = 0b111_000_000;
const RIGHT_COLUMN: u16 = 0b100_100_100;
const DESCENDING_DIAGONAL: u16 = 0b100_010_001;
const ASCENDING_DIAGONAL: u16 = 0b001_010_100;

/// The 8 winning lines in order: rows 0-2, columns 0-2, then the
/// descending and ascending diagonals.
pub const WIN_MASKS: [WinMask; 8] = generate_win_masks();

/// Three cells forming a complete line, as a 9-bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WinMask(u16);

impl WinMask {
    /// Returns the 9-bit pattern.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether every cell of this line is set in `occupancy`.
    pub const fn is_subset_of(self, occupancy: u16) -> bool {
        occupancy & self.0 == self.0
    }

    /// Cell indices (0-8) covered by this line.
    pub fn cells(self) -> impl Iterator<Item = usize> {
        (0..CELLS).filter(move |&index| self.0 & (1 << index) != 0)
    }
}

/// Generates the 8 winning lines of a 3x3 board.
///
/// Rows and columns are produced by shifting the bottom row down by 3 and
/// the right column down by 1.
pub const fn generate_win_masks() -> [WinMask; 8] {
    let mut masks = [WinMask(0); 8];
    let mut row = BOTTOM_ROW;
    let mut col = RIGHT_COLUMN;
    let mut i = 0;
    while i < 3 {
        masks[2 - i] = WinMask(row);
        masks[5 - i] = WinMask(col);
        row >>= 3;
        col >>= 1;
        i += 1;
    }
    masks[6] = WinMask(DESCENDING_DIAGONAL);
    masks[7] = WinMask(ASCENDING_DIAGONAL);
    masks
}

fn completes_any(masks: &[WinMask], occupancy: u16) -> bool {
    masks.iter().any(|mask| mask.is_subset_of(occupancy))
}

/// Every occupancy value (0-511) that contains at least one of `masks`.
#[instrument(level = "debug", skip(masks), fields(masks = masks.len()))]
pub fn expand_to_set(masks: &[WinMask]) -> HashSet<u16> {
    let set: HashSet<u16> = (0..LOOKUP_SIZE as u16)
        .filter(|&occupancy| completes_any(masks, occupancy))
        .collect();
    debug!(size = set.len(), "Expanded win set");
    set
}

/// Direct-indexed form of [`expand_to_set`]: entry `i` is true iff `i`
/// contains at least one of `masks`.
#[instrument(level = "debug", skip(masks), fields(masks = masks.len()))]
pub fn expand_to_lookup(masks: &[WinMask]) -> [bool; LOOKUP_SIZE] {
    let mut lookup = [false; LOOKUP_SIZE];
    for (occupancy, slot) in lookup.iter_mut().enumerate() {
        *slot = completes_any(masks, occupancy as u16);
    }
    debug!(
        winning = lookup.iter().filter(|&&wins| wins).count(),
        "Expanded win lookup"
    );
    lookup
}
