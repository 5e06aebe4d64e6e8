//! Table reshaping - catalog records into widget rows and columns.

pub mod listing;
pub mod matrix;
pub mod roster;
pub mod stat_range;

pub use listing::ListingCategory;
pub use matrix::{build_matrix, CostIndex, MatrixTable};
pub use roster::{row_in_series, select_levels, RosterTab, RosterTable, SERIES_PREFIX};
pub use stat_range::{rlerp, StatRange, StatRanges};
