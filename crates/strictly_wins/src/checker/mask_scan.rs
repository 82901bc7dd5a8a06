//! Strategy that compares the occupancy against every line.

use super::{Strategy, WinChecker};
use crate::board::OCCUPANCY_BITS;
use crate::masks::WinMask;
use crate::WinTables;
use std::sync::Arc;
use tracing::instrument;

/// Scans the 8 lines, up to 8 comparisons per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskScan {
    masks: [WinMask; 8],
}

impl MaskScan {
    /// Copies the lines out of `tables`.
    #[instrument(skip(tables))]
    pub fn new(tables: Arc<WinTables>) -> Self {
        Self {
            masks: *tables.masks(),
        }
    }
}

impl WinChecker for MaskScan {
    fn strategy(&self) -> Strategy {
        Strategy::MaskScan
    }

    fn wins(&self, occupancy: u16) -> bool {
        let occupancy = occupancy & OCCUPANCY_BITS;
        self.masks.iter().any(|mask| mask.is_subset_of(occupancy))
    }
}
