//! Ability identity and classification enums

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, Result};

/// Identity of an ability in the catalog.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    #[display(fmt = "Combat Strike")]
    CombatStrike,
    #[display(fmt = "Laser Pulse")]
    LaserPulse,
    #[display(fmt = "Plasma Shield")]
    PlasmaShield,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 3] = [
        AbilityKind::CombatStrike,
        AbilityKind::LaserPulse,
        AbilityKind::PlasmaShield,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(AbilityKind::CombatStrike),
            1 => Ok(AbilityKind::LaserPulse),
            2 => Ok(AbilityKind::PlasmaShield),
            _ => Err(CoreError::InvalidSelector(format!("ability index {index}"))),
        }
    }
}

impl std::str::FromStr for AbilityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "combat_strike" | "combat strike" => Ok(AbilityKind::CombatStrike),
            "laser_pulse" | "laser pulse" => Ok(AbilityKind::LaserPulse),
            "plasma_shield" | "plasma shield" => Ok(AbilityKind::PlasmaShield),
            _ => Err(CoreError::InvalidSelector(format!("ability \"{s}\""))),
        }
    }
}

/// What an ability does when it lands.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    #[display(fmt = "Damage")]
    Damage,
    #[display(fmt = "Defense")]
    Defense,
    #[display(fmt = "Heal")]
    Heal,
    #[display(fmt = "Buff")]
    Buff,
    #[display(fmt = "Debuff")]
    Debuff,
    #[display(fmt = "Spawn")]
    Spawn,
    #[display(fmt = "Custom")]
    Custom,
}

impl std::str::FromStr for EffectKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "damage" => Ok(EffectKind::Damage),
            "defense" => Ok(EffectKind::Defense),
            "heal" => Ok(EffectKind::Heal),
            "buff" => Ok(EffectKind::Buff),
            "debuff" => Ok(EffectKind::Debuff),
            "spawn" => Ok(EffectKind::Spawn),
            "custom" => Ok(EffectKind::Custom),
            _ => Err(CoreError::InvalidSelector(format!("effect kind \"{s}\""))),
        }
    }
}

/// Damage channel, only meaningful for [`EffectKind::Damage`] abilities.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageKind {
    #[display(fmt = "None")]
    None,
    #[display(fmt = "Physical")]
    Physical,
    #[display(fmt = "Energy")]
    Energy,
}

impl std::str::FromStr for DamageKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(DamageKind::None),
            "physical" => Ok(DamageKind::Physical),
            "energy" => Ok(DamageKind::Energy),
            _ => Err(CoreError::InvalidSelector(format!("damage kind \"{s}\""))),
        }
    }
}
