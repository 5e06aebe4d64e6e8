//! Crafting page use cases.
//!
//! The page loads the crafting document once and shows the incidence matrix
//! for the default tier. Picking another tier rebuilds the table from the
//! data the view already holds.

use std::sync::Arc;

use ffrkdb_domain::Rarity;
use ffrkdb_shared::TableCommand;

use crate::format::FormatterRegistry;
use crate::infrastructure::ports::{CatalogSource, TableSink};
use crate::table::{build_matrix, StatRanges};
use crate::view::CraftingView;

use super::error::ViewError;

/// Container for crafting use cases.
pub struct CraftingUseCases {
    pub load: Arc<LoadCraftingView>,
    pub change_rarity: Arc<ChangeRarity>,
}

impl CraftingUseCases {
    pub fn new(load: Arc<LoadCraftingView>, change_rarity: Arc<ChangeRarity>) -> Self {
        Self {
            load,
            change_rarity,
        }
    }
}

/// Rebuild the matrix for another tier.
pub struct ChangeRarity {
    sink: Arc<dyn TableSink>,
    registry: Arc<FormatterRegistry>,
}

impl ChangeRarity {
    pub fn new(sink: Arc<dyn TableSink>, registry: Arc<FormatterRegistry>) -> Self {
        Self { sink, registry }
    }

    /// # Returns
    /// * `Ok(())` - The sink received a rebuild for `rarity`
    /// * `Err(ViewError::NotLoaded)` - The view has not been loaded
    pub async fn execute(&self, view: &mut CraftingView, rarity: Rarity) -> Result<(), ViewError> {
        if !view.status().is_loaded() {
            return Err(ViewError::NotLoaded);
        }

        let feed = view.feed();
        let matrix = build_matrix(&feed.materials, &feed.abilities, view.costs(), rarity);
        let rows = self
            .registry
            .render(&matrix.rows, &matrix.columns, None, &StatRanges::default());
        let command = TableCommand::Rebuild {
            table_id: view.table_id.to_string(),
            columns: matrix.columns.clone(),
            rows,
        };

        tracing::info!(
            rarity = %rarity,
            materials = matrix.materials().len(),
            "Showing crafting matrix"
        );
        view.set_matrix(matrix);
        self.sink.apply(command).await?;
        Ok(())
    }
}

/// Fetch the crafting document and show the view's current tier.
pub struct LoadCraftingView {
    source: Arc<dyn CatalogSource>,
    change_rarity: Arc<ChangeRarity>,
}

impl LoadCraftingView {
    pub fn new(source: Arc<dyn CatalogSource>, change_rarity: Arc<ChangeRarity>) -> Self {
        Self {
            source,
            change_rarity,
        }
    }

    pub async fn execute(&self, view: &mut CraftingView) -> Result<(), ViewError> {
        view.begin_loading();

        let feed = match self.source.fetch_crafting().await {
            Ok(feed) => feed,
            Err(e) => {
                let err = ViewError::from(e);
                tracing::error!(error = %err, "Failed to load crafting data");
                view.fail(err.to_response().error);
                return Err(err);
            }
        };

        tracing::info!(
            materials = feed.materials.len(),
            abilities = feed.abilities.len(),
            costs = feed.ability_costs.len(),
            "Loaded crafting data"
        );
        view.finish_loading(feed);

        let rarity = view.rarity;
        self.change_rarity.execute(view, rarity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::TableId;
    use crate::infrastructure::ports::{MockCatalogSource, MockTableSink, SourceError};
    use crate::view::LoadStatus;
    use ffrkdb_domain::{Ability, AbilityCost, AbilityId, Material, MaterialId};
    use ffrkdb_shared::CraftingFeed;
    use std::path::PathBuf;
    use std::sync::Mutex;

    fn rarity(stars: u8) -> Rarity {
        Rarity::new(stars).unwrap()
    }

    fn feed() -> CraftingFeed {
        CraftingFeed {
            materials: vec![
                Material::new(MaterialId::new(1), "Major Fire Orb", rarity(3)),
                Material::new(MaterialId::new(2), "Major Ice Orb", rarity(3)),
                Material::new(MaterialId::new(3), "Greater Fire Orb", rarity(4)),
            ],
            abilities: vec![
                Ability::new(AbilityId::new(10), "Fira", rarity(3)),
                Ability::new(AbilityId::new(11), "Firaga", rarity(4)),
            ],
            ability_costs: vec![
                AbilityCost {
                    ability_id: AbilityId::new(10),
                    material_id: MaterialId::new(1),
                    count: 10,
                },
                AbilityCost {
                    ability_id: AbilityId::new(10),
                    material_id: MaterialId::new(2),
                    count: 6,
                },
                AbilityCost {
                    ability_id: AbilityId::new(11),
                    material_id: MaterialId::new(3),
                    count: 10,
                },
            ],
        }
    }

    fn recording_sink() -> (MockTableSink, Arc<Mutex<Vec<TableCommand>>>) {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let captured = commands.clone();
        let mut sink = MockTableSink::new();
        sink.expect_apply().returning(move |command| {
            captured.lock().unwrap().push(command);
            Ok(())
        });
        (sink, commands)
    }

    fn use_cases(source: MockCatalogSource, sink: MockTableSink) -> CraftingUseCases {
        let sink: Arc<dyn TableSink> = Arc::new(sink);
        let registry = Arc::new(FormatterRegistry::standard());
        let change_rarity = Arc::new(ChangeRarity::new(sink, registry));
        let load = Arc::new(LoadCraftingView::new(Arc::new(source), change_rarity.clone()));
        CraftingUseCases::new(load, change_rarity)
    }

    #[tokio::test]
    async fn load_rebuilds_default_tier() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_crafting()
            .times(1)
            .returning(|| Ok(feed()));
        let (sink, commands) = recording_sink();
        let use_cases = use_cases(source, sink);
        let mut view = CraftingView::new(TableId::new("#table"), rarity(3));

        use_cases.load.execute(&mut view).await.unwrap();

        assert!(view.status().is_loaded());
        let commands = commands.lock().unwrap();
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            TableCommand::Rebuild {
                table_id,
                columns,
                rows,
            } => {
                assert_eq!(table_id, "table");
                assert_eq!(columns.len(), 3);
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].cells["2"].html, "Fira");
            }
            other => panic!("expected rebuild, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn change_rarity_reuses_loaded_data() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_crafting()
            .times(1)
            .returning(|| Ok(feed()));
        let (sink, commands) = recording_sink();
        let use_cases = use_cases(source, sink);
        let mut view = CraftingView::new(TableId::default(), rarity(3));

        use_cases.load.execute(&mut view).await.unwrap();
        use_cases
            .change_rarity
            .execute(&mut view, rarity(4))
            .await
            .unwrap();

        assert_eq!(view.rarity, rarity(4));
        let matrix = view.matrix().unwrap();
        assert_eq!(
            matrix.cell(MaterialId::new(3), MaterialId::new(3)),
            Some(vec!["Firaga"])
        );
        assert_eq!(commands.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn change_rarity_before_load_is_rejected() {
        let (sink, commands) = recording_sink();
        let use_cases = use_cases(MockCatalogSource::new(), sink);
        let mut view = CraftingView::default();

        let result = use_cases.change_rarity.execute(&mut view, rarity(5)).await;

        assert!(matches!(result, Err(ViewError::NotLoaded)));
        assert!(commands.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_marks_view_failed() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_crafting()
            .returning(|| Err(SourceError::NotFound(PathBuf::from("abilities.json"))));
        let mut sink = MockTableSink::new();
        sink.expect_apply().never();
        let use_cases = use_cases(source, sink);
        let mut view = CraftingView::default();

        let result = use_cases.load.execute(&mut view).await;

        assert!(matches!(result, Err(ViewError::Source(_))));
        assert_eq!(
            view.status(),
            &LoadStatus::Failed("No results found".to_string())
        );
        assert!(view.matrix().is_none());
    }
}
