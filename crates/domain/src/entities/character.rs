//! Character entity - A playable character at one level
//!
//! The roster feed carries one record per (character, level). Abilities and
//! equipment arrive as lists of single-entry maps, which the roster table
//! later merges into flat columns:
//!
//! ```json
//! {"Abilities": [{"Black Magic": 3}], "Equipment": [{"Rod": "Rod"}]}
//! ```

use serde::{Deserialize, Serialize};

use ffrkdb_domain::{
    AbilityCategory, BuddyId, EquipmentCategory, Rarity, Series, SeriesStatBlock, StatBlock,
};

/// The legacy asset prefix the image paths were imported with.
const LEGACY_IMAGE_PREFIX: &str = "/dff";

/// A character's stats at one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Row id of this (character, level) record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub buddy_id: BuddyId,
    pub name: String,
    #[serde(default)]
    pub job_name: String,
    #[serde(default)]
    pub description: String,
    pub series_id: Series,
    #[serde(default)]
    pub image_path: String,
    pub level: u8,

    #[serde(flatten)]
    pub stats: StatBlock,
    #[serde(flatten)]
    pub series_stats: SeriesStatBlock,

    /// Highest rarity usable per ability category
    #[serde(rename = "Abilities", default)]
    pub abilities: Vec<CharacterAbility>,
    #[serde(rename = "Equipment", default)]
    pub equipment: Vec<EquipmentCategory>,
}

impl Character {
    /// Detail pages are per character, not per level.
    pub fn search_id(&self) -> u32 {
        self.buddy_id.get()
    }

    /// Applies the display fixes the importer used to make: the Keeper job is
    /// shown as "Tyro" and the legacy `/dff` asset prefix is dropped.
    pub fn normalized(mut self) -> Self {
        if self.job_name == "Keeper" {
            self.name = "Tyro".to_string();
        }
        if let Some(stripped) = self.image_path.strip_prefix(LEGACY_IMAGE_PREFIX) {
            self.image_path = stripped.to_string();
        }
        self
    }
}

/// Highest ability rarity a character may equip in one category.
///
/// Encoded on the wire as `{"<category name>": <rarity>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterAbility {
    pub category: AbilityCategory,
    pub rarity: Rarity,
}

impl Serialize for CharacterAbility {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.category.name(), &self.rarity)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for CharacterAbility {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entry = std::collections::BTreeMap::<String, Rarity>::deserialize(deserializer)?;
        let mut entries = entry.into_iter();
        match (entries.next(), entries.next()) {
            (Some((name, rarity)), None) => Ok(Self {
                category: name.parse().map_err(serde::de::Error::custom)?,
                rarity,
            }),
            _ => Err(serde::de::Error::custom(
                "ability entry must hold exactly one category",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vivi_json() -> &'static str {
        r#"{
            "id": 41,
            "buddy_id": 10900100,
            "name": "Vivi",
            "job_name": "Black Mage",
            "series_id": 109001,
            "image_path": "/dff/static/lang/image/buddy/10900100/10900100.png",
            "level": 50,
            "hp": 2921, "atk": 56, "defense": 60, "acc": 80, "eva": 90,
            "matk": 133, "mdef": 112, "mnd": 70, "spd": 99,
            "series_hp": 3213, "series_atk": 62, "series_def": 66,
            "Abilities": [{"Black Magic": 5}, {"Support": 3}],
            "Equipment": [{"Rod": "Rod"}, {"Hat": "Hat"}, {"Accessory": "Accessory"}]
        }"#
    }

    #[test]
    fn test_character_from_feed() {
        let vivi: Character = serde_json::from_str(vivi_json()).unwrap();
        assert_eq!(vivi.search_id(), 10900100);
        assert_eq!(vivi.series_id, Series::FfIX);
        assert_eq!(vivi.stats.matk, Some(133));
        assert_eq!(vivi.series_stats.series_def, 66);
        assert_eq!(vivi.series_stats.series_spd, 0);
        assert_eq!(vivi.abilities.len(), 2);
        assert_eq!(vivi.abilities[0].category, AbilityCategory::BlackMagic);
        assert_eq!(vivi.abilities[0].rarity.stars(), 5);
        assert_eq!(vivi.equipment.len(), 3);
        assert!(vivi.equipment[0].is_weapon());
    }

    #[test]
    fn test_normalized_strips_legacy_prefix() {
        let vivi: Character = serde_json::from_str(vivi_json()).unwrap();
        let vivi = vivi.normalized();
        assert_eq!(
            vivi.image_path,
            "/static/lang/image/buddy/10900100/10900100.png"
        );
        assert_eq!(vivi.name, "Vivi");
    }

    #[test]
    fn test_normalized_renames_keeper() {
        let mut record: Character = serde_json::from_str(vivi_json()).unwrap();
        record.job_name = "Keeper".to_string();
        record.name = "Keeper".to_string();
        assert_eq!(record.normalized().name, "Tyro");
    }

    #[test]
    fn test_character_ability_serde() {
        let ability: CharacterAbility = serde_json::from_str(r#"{"Celerity": 4}"#).unwrap();
        assert_eq!(ability.category, AbilityCategory::Celerity);
        assert_eq!(serde_json::to_string(&ability).unwrap(), r#"{"Celerity":4}"#);
        assert!(serde_json::from_str::<CharacterAbility>("{}").is_err());
    }
}
