extern crate self as ffrkdb_domain;

pub mod common;
pub mod damage;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{Ability, AbilityCost, Character, CharacterAbility, Material};

pub use error::DomainError;

// Re-export the damage model
pub use damage::{
    damage, required_attack, AttackKind, BoostMode, DamageReport, RequiredAttack, DAMAGE_CAP,
    SOFT_CAP,
};

// Re-export ID types
pub use ids::{AbilityGroupId, AbilityId, BuddyId, MaterialId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    AbilityCategory, EquipmentCategory, Rarity, RarityFilter, Series, SeriesStatBlock, Stat,
    StatBlock,
};
