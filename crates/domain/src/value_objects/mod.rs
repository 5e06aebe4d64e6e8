//! Value objects - Immutable objects defined by their attributes

mod category;
mod rarity;
mod series;
mod stat;

// Ability and equipment categories a character can use
pub use category::{AbilityCategory, EquipmentCategory};

// Display tiers
pub use rarity::{Rarity, RarityFilter};

// Realms
pub use series::Series;

// Character stats
pub use stat::{SeriesStatBlock, Stat, StatBlock};
