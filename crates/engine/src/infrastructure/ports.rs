//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Fetching the two catalog documents (could swap files -> HTTP)
//! - Handing finished tables to whatever displays them

use std::path::PathBuf;

use async_trait::async_trait;

use ffrkdb_shared::{CraftingFeed, RosterFeed, TableCommand};

// =============================================================================
// Error Types
// =============================================================================

/// Failure to fetch or parse a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Catalog document not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to hand a table to its display.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Catalog Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Materials, abilities and the costs joining them.
    async fn fetch_crafting(&self) -> Result<CraftingFeed, SourceError>;

    /// Every (character, level) record.
    async fn fetch_roster(&self) -> Result<RosterFeed, SourceError>;
}

// =============================================================================
// Table Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableSink: Send + Sync {
    async fn apply(&self, command: TableCommand) -> Result<(), SinkError>;
}
