//! Domain entities - Game records with identity

mod ability;
mod character;
mod material;

pub use ability::{Ability, AbilityCost};
pub use character::{Character, CharacterAbility};
pub use material::Material;
