//! Per-page view state.
//!
//! A view owns the data fetched for one page and the derived table. Selector
//! callbacks take the view by `&mut` and recompute from what it holds, so a
//! tier or realm switch never refetches.

use ffrkdb_domain::{Rarity, Series};
use ffrkdb_shared::CraftingFeed;

use crate::infrastructure::config::TableId;
use crate::table::{CostIndex, MatrixTable, RosterTab, RosterTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The fetch failed; the message is what the page shows.
    Failed(String),
}

impl LoadStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// The crafting page: one incidence matrix at a time.
#[derive(Debug, Clone, Default)]
pub struct CraftingView {
    pub table_id: TableId,
    pub rarity: Rarity,
    status: LoadStatus,
    feed: CraftingFeed,
    costs: CostIndex,
    matrix: Option<MatrixTable>,
}

impl CraftingView {
    pub fn new(table_id: TableId, rarity: Rarity) -> Self {
        Self {
            table_id,
            rarity,
            ..Default::default()
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn feed(&self) -> &CraftingFeed {
        &self.feed
    }

    pub fn costs(&self) -> &CostIndex {
        &self.costs
    }

    pub fn matrix(&self) -> Option<&MatrixTable> {
        self.matrix.as_ref()
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    pub(crate) fn finish_loading(&mut self, feed: CraftingFeed) {
        self.costs = CostIndex::build(&feed.abilities, &feed.ability_costs);
        self.feed = feed;
        self.status = LoadStatus::Loaded;
    }

    pub(crate) fn set_matrix(&mut self, matrix: MatrixTable) {
        self.rarity = matrix.rarity;
        self.matrix = Some(matrix);
    }
}

/// The roster page: every character, optionally compared within one realm.
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    pub table_id: TableId,
    pub tab: RosterTab,
    pub level_cap: Option<u8>,
    status: LoadStatus,
    table: Option<RosterTable>,
}

impl RosterView {
    pub fn new(table_id: TableId, tab: RosterTab, level_cap: Option<u8>) -> Self {
        Self {
            table_id,
            tab,
            level_cap,
            ..Default::default()
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn table(&self) -> Option<&RosterTable> {
        self.table.as_ref()
    }

    pub fn realm(&self) -> Option<Series> {
        self.table.as_ref().and_then(RosterTable::realm)
    }

    pub(crate) fn table_mut(&mut self) -> Option<&mut RosterTable> {
        self.table.as_mut()
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    pub(crate) fn finish_loading(&mut self, table: RosterTable) {
        self.table = Some(table);
        self.status = LoadStatus::Loaded;
    }
}
