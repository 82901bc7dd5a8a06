//! Precomputed win tables shared by the checkers.

use crate::masks::{LOOKUP_SIZE, WIN_MASKS, WinMask, expand_to_lookup, expand_to_set};
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use tracing::{debug, instrument};

static SHARED: LazyLock<Arc<WinTables>> = LazyLock::new(|| Arc::new(WinTables::new()));

/// The winning lines plus their set and lookup-table expansions.
///
/// Built once and never mutated. Checkers hold an `Arc` to it, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinTables {
    masks: [WinMask; 8],
    set: HashSet<u16>,
    lookup: [bool; LOOKUP_SIZE],
}

impl WinTables {
    /// Builds a fresh set of tables.
    #[instrument]
    pub fn new() -> Self {
        let masks = WIN_MASKS;
        let set = expand_to_set(&masks);
        let lookup = expand_to_lookup(&masks);
        debug!(set_size = set.len(), "Win tables built");
        Self { masks, set, lookup }
    }

    /// Returns the process-wide tables, building them on first use.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// The 8 winning lines.
    pub fn masks(&self) -> &[WinMask; 8] {
        &self.masks
    }

    /// Every winning occupancy value.
    pub fn set(&self) -> &HashSet<u16> {
        &self.set
    }

    /// Winning flag for each occupancy value 0-511.
    pub fn lookup(&self) -> &[bool; LOOKUP_SIZE] {
        &self.lookup
    }
}

impl Default for WinTables {
    fn default() -> Self {
        Self::new()
    }
}
