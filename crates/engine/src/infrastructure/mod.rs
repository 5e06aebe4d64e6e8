//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod file_source;
pub mod json_sink;
pub mod ports;
