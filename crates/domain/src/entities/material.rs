//! Material entity - Crafting orbs and crystals

use serde::{Deserialize, Serialize};

use ffrkdb_domain::{MaterialId, Rarity};

/// A crafting material, one per tier of each element (e.g. "Major Fire Orb").
///
/// Plain data struct; the feed never omits `id`, `name` or `rarity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub rarity: Rarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_gil: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Material {
    pub fn new(id: MaterialId, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id,
            name: name.into(),
            rarity,
            sale_gil: None,
            description: None,
        }
    }

    /// Id used to link to the material's detail page.
    pub fn search_id(&self) -> u32 {
        self.id.get()
    }
}
