//! Use cases - one module per page.
//!
//! Each use case holds its ports as `Arc<dyn Port>` and takes the page's view
//! state by `&mut` when it has any.

pub mod calculator;
pub mod crafting;
pub mod error;
pub mod listing;
pub mod roster;

pub use calculator::Calculator;
pub use crafting::CraftingUseCases;
pub use error::ViewError;
pub use listing::CategoryListing;
pub use roster::RosterUseCases;
