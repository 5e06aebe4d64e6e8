//! Application state and composition.

use std::sync::Arc;

use crate::format::FormatterRegistry;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::{CatalogSource, TableSink};
use crate::table::RosterTab;
use crate::use_cases::{self, crafting, roster};
use crate::view::{CraftingView, RosterView};

/// Main application state.
///
/// Holds the configuration and every use case, wired to one catalog source
/// and one table sink.
pub struct App {
    pub config: AppConfig,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub crafting: use_cases::CraftingUseCases,
    pub roster: use_cases::RosterUseCases,
    pub listing: Arc<use_cases::CategoryListing>,
    pub calculator: use_cases::Calculator,
}

impl App {
    pub fn new(
        config: AppConfig,
        source: Arc<dyn CatalogSource>,
        sink: Arc<dyn TableSink>,
    ) -> Self {
        let registry = Arc::new(FormatterRegistry::standard());

        let change_rarity = Arc::new(crafting::ChangeRarity::new(
            sink.clone(),
            registry.clone(),
        ));
        let crafting = use_cases::CraftingUseCases::new(
            Arc::new(crafting::LoadCraftingView::new(
                source.clone(),
                change_rarity.clone(),
            )),
            change_rarity,
        );

        let roster = use_cases::RosterUseCases::new(
            Arc::new(roster::LoadRosterView::new(
                source.clone(),
                sink.clone(),
                registry.clone(),
            )),
            Arc::new(roster::ChangeRealm::new(sink.clone(), registry.clone())),
        );

        let listing = Arc::new(use_cases::CategoryListing::new(source, sink, registry));
        let calculator = use_cases::Calculator::new(config.boost_mode);

        Self {
            config,
            use_cases: UseCases {
                crafting,
                roster,
                listing,
                calculator,
            },
        }
    }

    /// A crafting view on the configured table and default tier.
    pub fn crafting_view(&self) -> CraftingView {
        CraftingView::new(self.config.table_id.clone(), self.config.default_rarity)
    }

    pub fn roster_view(&self, tab: RosterTab, level_cap: Option<u8>) -> RosterView {
        RosterView::new(self.config.table_id.clone(), tab, level_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCatalogSource, MockTableSink};
    use ffrkdb_domain::{BoostMode, Rarity};

    #[test]
    fn views_use_configured_defaults() {
        let config = AppConfig {
            default_rarity: Rarity::new(4).unwrap(),
            boost_mode: BoostMode::PostMultiply,
            ..AppConfig::default()
        };
        let app = App::new(
            config,
            Arc::new(MockCatalogSource::new()),
            Arc::new(MockTableSink::new()),
        );

        let view = app.crafting_view();
        assert_eq!(view.rarity, Rarity::new(4).unwrap());
        assert_eq!(view.table_id.as_str(), "table");
        assert_eq!(
            app.use_cases.calculator.boost_mode(),
            BoostMode::PostMultiply
        );

        let roster = app.roster_view(RosterTab::Armor, Some(65));
        assert_eq!(roster.tab, RosterTab::Armor);
        assert_eq!(roster.level_cap, Some(65));
    }
}
