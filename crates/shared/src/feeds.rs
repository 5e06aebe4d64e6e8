//! Input feeds as served by the category JSON endpoints.

use serde::{Deserialize, Serialize};

use ffrkdb_domain::{Ability, AbilityCost, Character, Material};

/// The crafting document: every material, every ability grade and the join
/// table between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftingFeed {
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub ability_costs: Vec<AbilityCost>,
}

/// The roster document: a bare array of character records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterFeed(pub Vec<Character>);

impl RosterFeed {
    pub fn into_inner(self) -> Vec<Character> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
