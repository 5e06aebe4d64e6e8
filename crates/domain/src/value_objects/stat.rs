//! Stat value object - the nine character stats and their realm-synergy shadows.
//!
//! Provides type safety for stat columns instead of matching on "atk", "series_atk".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Character stats shown in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Hp,
    Atk,
    Defense,
    Acc,
    Eva,
    Matk,
    Mdef,
    Mnd,
    Spd,
}

impl Stat {
    pub const ALL: [Stat; 9] = [
        Self::Hp,
        Self::Atk,
        Self::Defense,
        Self::Acc,
        Self::Eva,
        Self::Matk,
        Self::Mdef,
        Self::Mnd,
        Self::Spd,
    ];

    /// Row key of the stat.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Atk => "atk",
            Self::Defense => "defense",
            Self::Acc => "acc",
            Self::Eva => "eva",
            Self::Matk => "matk",
            Self::Mdef => "mdef",
            Self::Mnd => "mnd",
            Self::Spd => "spd",
        }
    }

    /// Row key of the realm-synergy shadow stat.
    ///
    /// Defense is stored as `series_def`, not `series_defense`.
    pub fn series_key(&self) -> &'static str {
        match self {
            Self::Hp => "series_hp",
            Self::Atk => "series_atk",
            Self::Defense => "series_def",
            Self::Acc => "series_acc",
            Self::Eva => "series_eva",
            Self::Matk => "series_matk",
            Self::Mdef => "series_mdef",
            Self::Mnd => "series_mnd",
            Self::Spd => "series_spd",
        }
    }

    /// Column title in the game's own vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Atk => "ATK",
            Self::Defense => "DEF",
            Self::Acc => "ACC",
            Self::Eva => "EVA",
            Self::Matk => "MAG",
            Self::Mdef => "RES",
            Self::Mnd => "MIND",
            Self::Spd => "SPD",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base stats at one level.
///
/// A stat missing from the feed stays `None` and is left out of the row, so
/// its cell renders empty instead of failing the whole roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atk: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acc: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eva: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matk: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdef: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnd: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spd: Option<i32>,
}

/// Stats when fighting in the character's own realm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesStatBlock {
    #[serde(default)]
    pub series_hp: i32,
    #[serde(default)]
    pub series_atk: i32,
    #[serde(default)]
    pub series_def: i32,
    #[serde(default)]
    pub series_acc: i32,
    #[serde(default)]
    pub series_eva: i32,
    #[serde(default)]
    pub series_matk: i32,
    #[serde(default)]
    pub series_mdef: i32,
    #[serde(default)]
    pub series_mnd: i32,
    #[serde(default)]
    pub series_spd: i32,
}

impl SeriesStatBlock {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.series_hp,
            Stat::Atk => self.series_atk,
            Stat::Defense => self.series_def,
            Stat::Acc => self.series_acc,
            Stat::Eva => self.series_eva,
            Stat::Matk => self.series_matk,
            Stat::Mdef => self.series_mdef,
            Stat::Mnd => self.series_mnd,
            Stat::Spd => self.series_spd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_keys() {
        assert_eq!(Stat::Defense.key(), "defense");
        assert_eq!(Stat::Defense.series_key(), "series_def");
        assert_eq!(Stat::Matk.label(), "MAG");
    }

    #[test]
    fn test_stat_block_missing_stat_is_none() {
        let block: StatBlock =
            serde_json::from_str(r#"{"hp": 3000, "atk": 120, "defense": 95}"#).unwrap();
        assert_eq!(block.hp, Some(3000));
        assert_eq!(block.eva, None);

        let json = serde_json::to_value(block).unwrap();
        assert_eq!(json["defense"], 95);
        assert!(json.get("eva").is_none());
    }

    #[test]
    fn test_series_block_defaults_missing_fields() {
        let block: SeriesStatBlock = serde_json::from_str(r#"{"series_atk": 140}"#).unwrap();
        assert_eq!(block.get(Stat::Atk), 140);
        assert_eq!(block.get(Stat::Defense), 0);
    }
}
