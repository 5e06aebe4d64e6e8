//! Ability entity - Craftable abilities and their material costs

use serde::{Deserialize, Serialize};

use ffrkdb_domain::{AbilityGroupId, AbilityId, MaterialId, Rarity};

/// One grade of a craftable ability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub id: AbilityId,
    /// Shared by every grade of the same ability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_id: Option<AbilityGroupId>,
    pub name: String,
    pub rarity: Rarity,
    /// e.g. "Spellblade", "Celerity", "Combat"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// 1: Physical, 2: White, 3: Black, 4: Summon, 5: Other
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
}

impl Ability {
    pub fn new(id: AbilityId, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id,
            ability_id: None,
            name: name.into(),
            rarity,
            category_name: None,
            category_type: None,
            grade: None,
        }
    }

    /// Detail pages are per ability, not per grade.
    pub fn search_id(&self) -> u32 {
        self.ability_id
            .map(AbilityGroupId::get)
            .unwrap_or_else(|| self.id.get())
    }
}

/// How many of one material an ability grade consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCost {
    pub ability_id: AbilityId,
    pub material_id: MaterialId,
    #[serde(default)]
    pub count: u8,
}
