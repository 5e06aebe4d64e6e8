//! Response envelopes in the shape the JSON endpoints use.

use serde::{Deserialize, Serialize};

/// `{"success": false, "error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    /// The generic message shown when a table fails to load.
    pub fn no_results() -> Self {
        Self::new("No results found")
    }
}
