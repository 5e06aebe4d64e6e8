//! FFRK database engine library.
//!
//! This exposes the engine's modules for the `ffrkdb` binary and for tests.

pub mod app;
pub mod format;
pub mod infrastructure;
pub mod table;
pub mod use_cases;
pub mod view;
