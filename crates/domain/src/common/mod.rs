//! Common utility functions shared across the domain and the engine.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for datetime utilities

pub mod datetime;

// Re-export commonly used functions at crate root for convenience
pub use datetime::{
    format_long, from_epoch_seconds, parse_datetime, EPOCH_TIMESTAMP_FLOOR,
};
