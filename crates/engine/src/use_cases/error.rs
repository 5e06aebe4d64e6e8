//! View operation errors.

use ffrkdb_shared::ErrorResponse;

use crate::infrastructure::ports::{SinkError, SourceError};

/// Errors that can occur while loading or updating a table view.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Catalog error: {0}")]
    Source(#[from] SourceError),
    #[error("Table output error: {0}")]
    Sink(#[from] SinkError),
    #[error("View has no data yet")]
    NotLoaded,
    #[error("No results found")]
    NoResults,
}

impl ViewError {
    /// The envelope the page shows. Fetch failures collapse to the generic
    /// message; the detail stays in the logs.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::Source(_) | Self::NoResults => ErrorResponse::no_results(),
            other => ErrorResponse::new(other.to_string()),
        }
    }
}
