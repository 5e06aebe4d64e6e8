//! FFRK database wire types - shared between the engine and any table front end
//!
//! This crate contains:
//! - Input feeds (the crafting document and the roster document)
//! - Table widget payloads (columns, rows, rendered cells, load/rebuild commands)
//! - The `{"success": false, "error": ...}` envelope
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, thiserror and the domain
//! 2. **No business logic** - Pure data types and serialization

pub mod feeds;
pub mod responses;
pub mod table;

pub use feeds::{CraftingFeed, RosterFeed};
pub use responses::ErrorResponse;
pub use table::{
    CellStyle, RenderedCell, RenderedRow, TableColumn, TableCommand, TableRow, ALT_FIELD,
    HEAT_MAP_STYLE, SORT_PREFIX,
};
