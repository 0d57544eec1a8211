//! Character abilities
//!
//! Ability parameters are ranges, not scalars: each cast samples power,
//! duration, cooldown and cost uniformly from its definition's ranges. The
//! catalog owns one independent cooldown timer per definition.

pub mod catalog;
pub mod definition;
pub mod kinds;

pub use catalog::{AbilityCatalog, AbilityRuntime};
pub use definition::{AbilityDefinition, ValueRange};
pub use kinds::{AbilityKind, DamageKind, EffectKind};
