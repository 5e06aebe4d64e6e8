//! Category listing use case.

use std::sync::Arc;

use ffrkdb_domain::RarityFilter;
use ffrkdb_shared::TableCommand;

use crate::format::FormatterRegistry;
use crate::infrastructure::config::TableId;
use crate::infrastructure::ports::{CatalogSource, TableSink};
use crate::table::{ListingCategory, StatRanges};

use super::error::ViewError;

/// Materials or abilities as a plain sortable table.
pub struct CategoryListing {
    source: Arc<dyn CatalogSource>,
    sink: Arc<dyn TableSink>,
    registry: Arc<FormatterRegistry>,
}

impl CategoryListing {
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

    /// # Returns
    /// * `Ok(n)` - The sink received a table of `n` rows
    /// * `Err(ViewError::NoResults)` - Nothing in the category matches `filter`
    pub async fn execute(
        &self,
        category: ListingCategory,
        filter: RarityFilter,
        table_id: &TableId,
    ) -> Result<usize, ViewError> {
        let feed = self.source.fetch_crafting().await.map_err(|e| {
            tracing::error!(error = %e, category = %category, "Failed to load listing data");
            ViewError::from(e)
        })?;

        let rows = category.rows(&feed, filter);
        if rows.is_empty() {
            tracing::info!(category = %category, filter = %filter, "Listing is empty");
            return Err(ViewError::NoResults);
        }

        let columns = category.columns();
        let rendered = self
            .registry
            .render(&rows, &columns, None, &StatRanges::default());
        let count = rendered.len();

        tracing::info!(category = %category, filter = %filter, rows = count, "Listing");
        self.sink
            .apply(TableCommand::Rebuild {
                table_id: table_id.to_string(),
                columns,
                rows: rendered,
            })
            .await?;
        Ok(count)
    }
}
