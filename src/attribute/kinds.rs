//! Attribute identity enums
//!
//! The enums are closed: every variant maps to exactly one module in an
//! [`AttributeSet`](crate::attribute::AttributeSet), so by-kind lookups are
//! total. Raw selectors arriving from outside the core (indices, names) go
//! through the fallible constructors here, which surface
//! [`CoreError::InvalidSelector`] instead of aliasing to an arbitrary module.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, Result};

/// One of the four regenerating survival pools.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryAttribute {
    #[display(fmt = "Health")]
    Health,
    #[display(fmt = "Stamina")]
    Stamina,
    #[display(fmt = "Energy")]
    Energy,
    #[display(fmt = "Shield")]
    Shield,
}

impl PrimaryAttribute {
    pub const ALL: [PrimaryAttribute; 4] = [
        PrimaryAttribute::Health,
        PrimaryAttribute::Stamina,
        PrimaryAttribute::Energy,
        PrimaryAttribute::Shield,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(PrimaryAttribute::Health),
            1 => Ok(PrimaryAttribute::Stamina),
            2 => Ok(PrimaryAttribute::Energy),
            3 => Ok(PrimaryAttribute::Shield),
            _ => Err(CoreError::InvalidSelector(format!(
                "primary attribute index {index}"
            ))),
        }
    }
}

impl std::str::FromStr for PrimaryAttribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "health" => Ok(PrimaryAttribute::Health),
            "stamina" => Ok(PrimaryAttribute::Stamina),
            "energy" => Ok(PrimaryAttribute::Energy),
            "shield" => Ok(PrimaryAttribute::Shield),
            _ => Err(CoreError::InvalidSelector(format!(
                "primary attribute \"{s}\""
            ))),
        }
    }
}

/// One of the five passive modifier attributes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryAttribute {
    /// Damage + protection
    #[display(fmt = "Output")]
    Output,
    /// Movement speed + jump height
    #[display(fmt = "Actuation")]
    Actuation,
    /// Health + shield
    #[display(fmt = "Integrity")]
    Integrity,
    /// Energy pool + efficiency
    #[display(fmt = "Capacity")]
    Capacity,
    /// Shield recharge + cooldowns
    #[display(fmt = "Regeneration")]
    Regeneration,
}

impl SecondaryAttribute {
    pub const ALL: [SecondaryAttribute; 5] = [
        SecondaryAttribute::Output,
        SecondaryAttribute::Actuation,
        SecondaryAttribute::Integrity,
        SecondaryAttribute::Capacity,
        SecondaryAttribute::Regeneration,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        match index {
            0 => Ok(SecondaryAttribute::Output),
            1 => Ok(SecondaryAttribute::Actuation),
            2 => Ok(SecondaryAttribute::Integrity),
            3 => Ok(SecondaryAttribute::Capacity),
            4 => Ok(SecondaryAttribute::Regeneration),
            _ => Err(CoreError::InvalidSelector(format!(
                "secondary attribute index {index}"
            ))),
        }
    }
}

impl std::str::FromStr for SecondaryAttribute {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "output" => Ok(SecondaryAttribute::Output),
            "actuation" => Ok(SecondaryAttribute::Actuation),
            "integrity" => Ok(SecondaryAttribute::Integrity),
            "capacity" => Ok(SecondaryAttribute::Capacity),
            "regeneration" => Ok(SecondaryAttribute::Regeneration),
            _ => Err(CoreError::InvalidSelector(format!(
                "secondary attribute \"{s}\""
            ))),
        }
    }
}

/// Any of the nine attributes, primary or secondary.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    #[display(fmt = "{}", _0)]
    Primary(PrimaryAttribute),
    #[display(fmt = "{}", _0)]
    Secondary(SecondaryAttribute),
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 9] = [
        AttributeKind::Primary(PrimaryAttribute::Health),
        AttributeKind::Primary(PrimaryAttribute::Stamina),
        AttributeKind::Primary(PrimaryAttribute::Energy),
        AttributeKind::Primary(PrimaryAttribute::Shield),
        AttributeKind::Secondary(SecondaryAttribute::Output),
        AttributeKind::Secondary(SecondaryAttribute::Actuation),
        AttributeKind::Secondary(SecondaryAttribute::Integrity),
        AttributeKind::Secondary(SecondaryAttribute::Capacity),
        AttributeKind::Secondary(SecondaryAttribute::Regeneration),
    ];
}

impl From<PrimaryAttribute> for AttributeKind {
    fn from(kind: PrimaryAttribute) -> Self {
        AttributeKind::Primary(kind)
    }
}

impl From<SecondaryAttribute> for AttributeKind {
    fn from(kind: SecondaryAttribute) -> Self {
        AttributeKind::Secondary(kind)
    }
}

impl std::str::FromStr for AttributeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(primary) = s.parse::<PrimaryAttribute>() {
            return Ok(primary.into());
        }
        if let Ok(secondary) = s.parse::<SecondaryAttribute>() {
            return Ok(secondary.into());
        }
        Err(CoreError::InvalidSelector(format!("attribute \"{s}\"")))
    }
}
