//! Roster page use cases.

use std::sync::Arc;

use ffrkdb_domain::{Character, Series};
use ffrkdb_shared::{RenderedRow, TableCommand};

use crate::format::FormatterRegistry;
use crate::infrastructure::ports::{CatalogSource, TableSink};
use crate::table::{select_levels, RosterTable};
use crate::view::RosterView;

use super::error::ViewError;

/// Container for roster use cases.
pub struct RosterUseCases {
    pub load: Arc<LoadRosterView>,
    pub change_realm: Arc<ChangeRealm>,
}

impl RosterUseCases {
    pub fn new(load: Arc<LoadRosterView>, change_realm: Arc<ChangeRealm>) -> Self {
        Self { load, change_realm }
    }
}

fn render(
    view: &RosterView,
    table: &RosterTable,
    registry: &FormatterRegistry,
) -> Vec<RenderedRow> {
    registry.render(
        table.rows(),
        &view.tab.columns(),
        table.realm(),
        table.ranges(),
    )
}

/// Fetch every character record and build the roster table.
pub struct LoadRosterView {
    source: Arc<dyn CatalogSource>,
    sink: Arc<dyn TableSink>,
    registry: Arc<FormatterRegistry>,
}

impl LoadRosterView {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        sink: Arc<dyn TableSink>,
        registry: Arc<FormatterRegistry>,
    ) -> Self {
        Self {
            source,
            sink,
            registry,
        }
    }

    /// Loads the roster and sends the first build of the table, columns
    /// included.
    pub async fn execute(&self, view: &mut RosterView) -> Result<(), ViewError> {
        view.begin_loading();

        let feed = match self.source.fetch_roster().await {
            Ok(feed) => feed,
            Err(e) => {
                let err = ViewError::from(e);
                tracing::error!(error = %err, "Failed to load roster data");
                view.fail(err.to_response().error);
                return Err(err);
            }
        };

        let fetched = feed.len();
        let records: Vec<Character> = feed
            .into_inner()
            .into_iter()
            .map(Character::normalized)
            .collect();
        let records = select_levels(records, view.level_cap);
        let table = RosterTable::build(&records);

        tracing::info!(
            fetched,
            characters = table.rows().len(),
            level_cap = ?view.level_cap,
            tab = %view.tab,
            "Loaded roster"
        );

        let command = TableCommand::Rebuild {
            table_id: view.table_id.to_string(),
            columns: view.tab.columns(),
            rows: render(view, &table, &self.registry),
        };
        view.finish_loading(table);
        self.sink.apply(command).await?;
        Ok(())
    }
}

/// Compare characters within one realm, or stop comparing with `None`.
pub struct ChangeRealm {
    sink: Arc<dyn TableSink>,
    registry: Arc<FormatterRegistry>,
}

impl ChangeRealm {
    pub fn new(sink: Arc<dyn TableSink>, registry: Arc<FormatterRegistry>) -> Self {
        Self { sink, registry }
    }

    pub async fn execute(
        &self,
        view: &mut RosterView,
        realm: Option<Series>,
    ) -> Result<(), ViewError> {
        // Ranges stay as computed at load time; only sort keys and styles move.
        view.table_mut()
            .ok_or(ViewError::NotLoaded)?
            .apply_realm(realm);

        let table = view.table().ok_or(ViewError::NotLoaded)?;
        let command = TableCommand::Load {
            table_id: view.table_id.to_string(),
            rows: render(view, table, &self.registry),
        };

        tracing::info!(realm = ?realm, "Changed realm comparison");
        self.sink.apply(command).await?;
        Ok(())
    }
}
