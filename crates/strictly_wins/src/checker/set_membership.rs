//! Strategy that looks the occupancy up in the set of winning values.

use super::{Strategy, WinChecker};
use crate::board::OCCUPANCY_BITS;
use crate::WinTables;
use std::sync::Arc;
use tracing::instrument;

/// One hash lookup per query.
#[derive(Debug, Clone)]
pub struct SetMembership {
    tables: Arc<WinTables>,
}

impl SetMembership {
    /// Uses the win set from `tables`.
    #[instrument(skip(tables))]
    pub fn new(tables: Arc<WinTables>) -> Self {
        Self { tables }
    }
}

impl WinChecker for SetMembership {
    fn strategy(&self) -> Strategy {
        Strategy::SetMembership
    }

    fn wins(&self, occupancy: u16) -> bool {
        self.tables.set().contains(&(occupancy & OCCUPANCY_BITS))
    }
}
