//! Damage model - the in-game damage curve and its inverse.
//!
//! Damage follows a power law on attack, divided by the square root of the
//! target's defense. Once the attack side of the curve passes the soft cap of
//! 2000 "pre-mitigation" units, a square-root formula takes over and growth
//! slows sharply.
//!
//! | kind     | curve exponent | cap exponent |
//! |----------|----------------|--------------|
//! | physical | 1.8            | 1.3          |
//! | magical  | 1.65           | 1.15         |
//!
//! The functions never fail. Negative or NaN inputs produce NaN output, which
//! renders as an empty calculator field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Pre-mitigation ceiling where the square-root branch takes over.
pub const SOFT_CAP: f64 = 2000.0;

/// Highest damage a single hit can display.
pub const DAMAGE_CAP: f64 = 9999.0;

/// Physical (ATK) or magical (MAG/MND) attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackKind {
    Physical,
    Magical,
}

impl AttackKind {
    /// Exponent applied to attack below the soft cap.
    pub fn curve_exponent(self) -> f64 {
        match self {
            Self::Physical => 1.8,
            Self::Magical => 1.65,
        }
    }

    /// Exponent used to test attack against the soft cap.
    pub fn cap_exponent(self) -> f64 {
        match self {
            Self::Physical => 1.3,
            Self::Magical => 1.15,
        }
    }

    /// Stat label shown next to a requirement.
    pub fn stat_label(self) -> &'static str {
        match self {
            Self::Physical => "ATK",
            Self::Magical => "MAG/MND",
        }
    }

    fn is_past_soft_cap(self, attack: f64) -> bool {
        attack.powf(self.cap_exponent()) > SOFT_CAP
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Physical => write!(f, "Physical"),
            Self::Magical => write!(f, "Magical"),
        }
    }
}

/// How a boosted hit is applied.
///
/// Two revisions of the calculator disagree: one scales attack by 1.25 before
/// the curve, the other scales the final damage by 1.5. Both are kept and the
/// caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoostMode {
    /// Attack × 1.25, then the curve.
    #[default]
    PreMultiply,
    /// The curve, then damage × 1.5.
    PostMultiply,
}

impl BoostMode {
    pub const PRE_MULTIPLIER: f64 = 1.25;
    pub const POST_MULTIPLIER: f64 = 1.5;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreMultiply => "pre",
            Self::PostMultiply => "post",
        }
    }
}

impl fmt::Display for BoostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoostMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pre" | "pre_multiply" | "attack" => Ok(Self::PreMultiply),
            "post" | "post_multiply" | "damage" => Ok(Self::PostMultiply),
            _ => Err(DomainError::parse(format!("Unknown boost mode: {}", s))),
        }
    }
}

/// Unrounded damage before any boost.
fn raw_damage(attack: f64, defense: f64, kind: AttackKind) -> f64 {
    if kind.is_past_soft_cap(attack) {
        SOFT_CAP * attack.sqrt() / defense.sqrt()
    } else {
        attack.powf(kind.curve_exponent()) / defense.sqrt()
    }
}

/// Damage dealt by `attack` against `defense`, floored.
///
/// `boost` is `None` for a normal hit.
pub fn damage(attack: f64, defense: f64, kind: AttackKind, boost: Option<BoostMode>) -> f64 {
    let dealt = match boost {
        None => raw_damage(attack, defense, kind),
        Some(BoostMode::PreMultiply) => {
            raw_damage(attack * BoostMode::PRE_MULTIPLIER, defense, kind)
        }
        Some(BoostMode::PostMultiply) => {
            raw_damage(attack, defense, kind) * BoostMode::POST_MULTIPLIER
        }
    };
    dealt.floor()
}

/// Smallest attack that deals `target` damage against `defense`, ceiled.
///
/// Targets above [`DAMAGE_CAP`] are clamped to it.
pub fn required_attack(target: f64, defense: f64, kind: AttackKind) -> f64 {
    let mitigated = target.min(DAMAGE_CAP) * defense.sqrt();
    let mut attack = mitigated.powf(1.0 / kind.curve_exponent());
    if kind.is_past_soft_cap(attack) {
        attack = (mitigated / SOFT_CAP).powi(2);
    }
    attack.ceil()
}

/// The calculator page: one attack value against one defense value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub attack: f64,
    pub defense: f64,
    pub boost_mode: BoostMode,
    pub physical: f64,
    pub boosted_physical: f64,
    pub magical: f64,
}

impl DamageReport {
    pub fn calculate(attack: f64, defense: f64, boost_mode: BoostMode) -> Self {
        Self {
            attack,
            defense,
            boost_mode,
            physical: damage(attack, defense, AttackKind::Physical, None),
            boosted_physical: damage(attack, defense, AttackKind::Physical, Some(boost_mode)),
            magical: damage(attack, defense, AttackKind::Magical, None),
        }
    }
}

/// Attack needed on each side to deal a target amount of damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequiredAttack {
    /// Target after clamping to the damage cap.
    pub target: f64,
    pub defense: f64,
    pub physical: f64,
    pub magical: f64,
}

impl RequiredAttack {
    pub fn for_target(hp: f64, defense: f64) -> Self {
        Self {
            target: hp.min(DAMAGE_CAP),
            defense,
            physical: required_attack(hp, defense, AttackKind::Physical),
            magical: required_attack(hp, defense, AttackKind::Magical),
        }
    }

    pub fn get(&self, kind: AttackKind) -> f64 {
        match kind {
            AttackKind::Physical => self.physical,
            AttackKind::Magical => self.magical,
        }
    }
}
