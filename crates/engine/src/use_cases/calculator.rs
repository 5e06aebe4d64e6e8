//! The damage calculator page.

use ffrkdb_domain::{BoostMode, DamageReport, RequiredAttack};

/// Forward and inverse damage calculations with a configured boost mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    boost_mode: BoostMode,
}

impl Calculator {
    pub fn new(boost_mode: BoostMode) -> Self {
        Self { boost_mode }
    }

    pub fn boost_mode(&self) -> BoostMode {
        self.boost_mode
    }

    pub fn damage(&self, attack: f64, defense: f64) -> DamageReport {
        let report = DamageReport::calculate(attack, defense, self.boost_mode);
        tracing::debug!(
            attack,
            defense,
            boost_mode = %self.boost_mode,
            physical = report.physical,
            magical = report.magical,
            "Calculated damage"
        );
        report
    }

    /// Attack needed to deal `hp` damage, capped at 9999.
    pub fn required_attack(&self, hp: f64, defense: f64) -> RequiredAttack {
        let required = RequiredAttack::for_target(hp, defense);
        tracing::debug!(
            hp,
            defense,
            physical = required.physical,
            magical = required.magical,
            "Calculated required attack"
        );
        required
    }
}
