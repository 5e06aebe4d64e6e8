//! Rarity tier - the star rating that partitions materials and abilities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A star tier, 1* through 7*.
///
/// Serialized as a bare integer, matching the game data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rarity(u8);

impl Rarity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    pub fn new(stars: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(DomainError::validation(format!(
                "rarity {} is outside {}..={}",
                stars,
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

/// The crafting page opens on the 5* tier.
impl Default for Rarity {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*", self.0)
    }
}

impl TryFrom<u8> for Rarity {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rarity> for u8 {
    fn from(value: Rarity) -> Self {
        value.0
    }
}

impl FromStr for Rarity {
    type Err = DomainError;

    /// Accepts `5` or `5*`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches('*');
        let stars = digits
            .parse::<u8>()
            .map_err(|_| DomainError::parse(format!("Invalid rarity: {}", s)))?;
        Self::new(stars)
    }
}

/// Either every tier or exactly one, as in `?rarity=all` / `?rarity=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RarityFilter {
    #[default]
    All,
    Only(Rarity),
}

impl RarityFilter {
    pub fn matches(&self, rarity: Rarity) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == rarity,
        }
    }
}

impl fmt::Display for RarityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(rarity) => write!(f, "{}", rarity.stars()),
        }
    }
}

impl FromStr for RarityFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}
