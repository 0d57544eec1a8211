//! Immutable ability definitions
//!
//! A definition carries parameter *ranges*; concrete values are sampled
//! per cast. The three reference abilities are provided as named
//! constructors.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ability::kinds::{AbilityKind, DamageKind, EffectKind};
use crate::attribute::kinds::PrimaryAttribute;

/// Inclusive `[min, max]` parameter range sampled uniformly per use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl ValueRange {
    pub const ZERO: ValueRange = ValueRange { min: 0.0, max: 0.0 };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw an independent uniform sample. A collapsed or inverted range
    /// yields its minimum.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parameters of one ability, fixed at catalog construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub title: String,
    pub description: String,
    pub kind: AbilityKind,
    pub effect: EffectKind,
    pub damage: DamageKind,
    pub power_range: ValueRange,
    pub duration_range: ValueRange,
    pub cooldown_range: ValueRange,
    /// Which primary attribute pays the activation cost
    pub cost_kind: PrimaryAttribute,
    pub cost_range: ValueRange,
    pub range: f32,
    pub radius: f32,
}

impl AbilityDefinition {
    pub fn combat_strike() -> Self {
        Self {
            title: "Combat Strike".to_string(),
            description:
                "A powerful melee attack that deals significant damage to a single target."
                    .to_string(),
            kind: AbilityKind::CombatStrike,
            effect: EffectKind::Damage,
            damage: DamageKind::Physical,
            power_range: ValueRange::new(10.0, 15.0),
            duration_range: ValueRange::ZERO,
            cooldown_range: ValueRange::new(2.0, 3.0),
            cost_kind: PrimaryAttribute::Energy,
            cost_range: ValueRange::new(8.0, 10.0),
            range: 100.0,
            radius: 30.0,
        }
    }

    pub fn laser_pulse() -> Self {
        Self {
            title: "Laser Pulse".to_string(),
            description: "Fires a concentrated beam of energy that damages enemies in its path."
                .to_string(),
            kind: AbilityKind::LaserPulse,
            effect: EffectKind::Damage,
            damage: DamageKind::Energy,
            power_range: ValueRange::new(8.0, 12.0),
            duration_range: ValueRange::ZERO,
            cooldown_range: ValueRange::new(2.0, 4.0),
            cost_kind: PrimaryAttribute::Energy,
            cost_range: ValueRange::new(7.0, 12.0),
            range: 500.0,
            radius: 20.0,
        }
    }

    pub fn plasma_shield() -> Self {
        Self {
            title: "Plasma Shield".to_string(),
            description:
                "Generates a protective shield that absorbs incoming damage for a short duration."
                    .to_string(),
            kind: AbilityKind::PlasmaShield,
            effect: EffectKind::Defense,
            damage: DamageKind::None,
            power_range: ValueRange::ZERO,
            duration_range: ValueRange::new(5.0, 10.0),
            cooldown_range: ValueRange::new(10.0, 15.0),
            cost_kind: PrimaryAttribute::Energy,
            cost_range: ValueRange::new(15.0, 25.0),
            range: 0.0,
            radius: 0.0,
        }
    }

    pub fn random_power(&self, rng: &mut impl Rng) -> f32 {
        self.power_range.sample(rng)
    }

    pub fn random_duration(&self, rng: &mut impl Rng) -> f32 {
        self.duration_range.sample(rng)
    }

    pub fn random_cooldown(&self, rng: &mut impl Rng) -> f32 {
        self.cooldown_range.sample(rng)
    }

    pub fn random_cost(&self, rng: &mut impl Rng) -> f32 {
        self.cost_range.sample(rng)
    }
}
