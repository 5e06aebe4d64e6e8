//! Ability and equipment categories a character can use.
//!
//! The game identifies both by small numeric ids whose ranges overlap, so each
//! gets its own enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Id inside an exporter label such as `Unknown AbilityCategory[21]`.
fn unknown_label_id(label: &str) -> Option<u8> {
    label
        .strip_prefix("Unknown ")?
        .strip_suffix(']')?
        .split_once('[')
        .and_then(|(_, id)| id.parse().ok())
}

macro_rules! define_category {
    ($name:ident, $entity:literal, { $($variant:ident => ($id:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
            /// Id the table does not know yet
            Unknown(u8),
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn id(&self) -> u8 {
                match self {
                    $(Self::$variant => $id,)+
                    Self::Unknown(id) => *id,
                }
            }

            pub fn from_id(id: u8) -> Self {
                match id {
                    $($id => Self::$variant,)+
                    other => Self::Unknown(other),
                }
            }

            /// Column key and title. Unknown ids keep the exporter's label,
            /// e.g. `Unknown EquipmentCategory[98]`.
            pub fn name(&self) -> String {
                match self {
                    $(Self::$variant => $label.to_string(),)+
                    Self::Unknown(id) => format!("Unknown {}[{}]", stringify!($name), id),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.name())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if let Ok(id) = trimmed.parse::<u8>() {
                    return Ok(Self::from_id(id));
                }
                if let Some(id) = unknown_label_id(trimmed) {
                    return Ok(Self::from_id(id));
                }
                Self::ALL
                    .iter()
                    .copied()
                    .find(|category| category.name().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| {
                        DomainError::parse(format!("Unknown {}: {}", $entity, s))
                    })
            }
        }
    };
}

define_category!(AbilityCategory, "ability category", {
    BlackMagic => (1, "Black Magic"),
    WhiteMagic => (2, "White Magic"),
    Summoning => (3, "Summoning"),
    Spellblade => (4, "Spellblade"),
    Combat => (5, "Combat"),
    Support => (6, "Support"),
    Celerity => (7, "Celerity"),
    Dragoon => (8, "Dragoon"),
    Monk => (9, "Monk"),
    Thief => (10, "Thief"),
    Knight => (11, "Knight"),
    Samurai => (12, "Samurai"),
    Ninja => (13, "Ninja"),
    Bard => (14, "Bard"),
});

define_category!(EquipmentCategory, "equipment category", {
    Dagger => (1, "Dagger"),
    Sword => (2, "Sword"),
    Katana => (3, "Katana"),
    Axe => (4, "Axe"),
    Hammer => (5, "Hammer"),
    Spear => (6, "Spear"),
    Fist => (7, "Fist"),
    Rod => (8, "Rod"),
    Staff => (9, "Staff"),
    Bow => (10, "Bow"),
    Instrument => (11, "Instrument"),
    Whip => (12, "Whip"),
    Thrown => (13, "Thrown"),
    Book => (14, "Book"),
    Gun => (15, "Gun"),
    Ball => (30, "Ball"),
    Shield => (50, "Shield"),
    Hat => (51, "Hat"),
    Helm => (52, "Helm"),
    LightArmor => (53, "Light Armor"),
    Armor => (54, "Armor"),
    Robe => (55, "Robe"),
    Bracer => (56, "Bracer"),
    Accessory => (80, "Accessory"),
});

impl EquipmentCategory {
    /// Weapons sit below id 50, armor and accessories at 50 and above.
    pub fn is_weapon(&self) -> bool {
        self.id() < 50
    }
}

// The roster feed encodes equipment as `{"Dagger": "Dagger"}`.
impl Serialize for EquipmentCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let name = self.name();
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&name, &name)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for EquipmentCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entry = std::collections::BTreeMap::<String, String>::deserialize(deserializer)?;
        let mut keys = entry.into_keys();
        match (keys.next(), keys.next()) {
            (Some(name), None) => name.parse().map_err(serde::de::Error::custom),
            _ => Err(serde::de::Error::custom(
                "equipment entry must hold exactly one category",
            )),
        }
    }
}
