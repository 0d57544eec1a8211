//! The per-character ability catalog
//!
//! A catalog is a fixed set of definitions chosen at build time, each with
//! an independent runtime cooldown timer. Lookup by kind returns an error
//! for kinds absent from the catalog; no placeholder is ever substituted.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ability::definition::AbilityDefinition;
use crate::ability::kinds::AbilityKind;
use crate::core::error::{CoreError, Result};

/// Mutable per-ability state.
///
/// `cooldown_remaining` only decreases under ticking and is only set to a
/// positive value by [`AbilityCatalog::start_cooldown`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilityRuntime {
    cooldown_remaining: f32,
}

impl AbilityRuntime {
    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_remaining
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown_remaining > 0.0
    }

    fn tick(&mut self, dt: f32) {
        if self.cooldown_remaining > 0.0 {
            self.cooldown_remaining = (self.cooldown_remaining - dt).max(0.0);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct AbilityEntry {
    definition: AbilityDefinition,
    runtime: AbilityRuntime,
}

/// Fixed registry of abilities with independent cooldown timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityCatalog {
    entries: Vec<AbilityEntry>,
}

impl Default for AbilityCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AbilityCatalog {
    /// Build a catalog from a fixed set of definitions.
    ///
    /// Duplicate kinds are rejected; the catalog's identity map must be
    /// unambiguous.
    pub fn new(definitions: Vec<AbilityDefinition>) -> Result<Self> {
        let mut entries: Vec<AbilityEntry> = Vec::with_capacity(definitions.len());
        for definition in definitions {
            if entries.iter().any(|e| e.definition.kind == definition.kind) {
                return Err(CoreError::InvalidContent(format!(
                    "duplicate ability kind {}",
                    definition.kind
                )));
            }
            entries.push(AbilityEntry {
                definition,
                runtime: AbilityRuntime::default(),
            });
        }
        Ok(Self { entries })
    }

    /// The reference catalog: Combat Strike, Laser Pulse, Plasma Shield.
    pub fn with_defaults() -> Self {
        Self {
            entries: [
                AbilityDefinition::combat_strike(),
                AbilityDefinition::laser_pulse(),
                AbilityDefinition::plasma_shield(),
            ]
            .into_iter()
            .map(|definition| AbilityEntry {
                definition,
                runtime: AbilityRuntime::default(),
            })
            .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = AbilityKind> + '_ {
        self.entries.iter().map(|e| e.definition.kind)
    }

    fn entry(&self, kind: AbilityKind) -> Result<&AbilityEntry> {
        self.entries
            .iter()
            .find(|e| e.definition.kind == kind)
            .ok_or(CoreError::UnknownAbility(kind))
    }

    fn entry_mut(&mut self, kind: AbilityKind) -> Result<&mut AbilityEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.definition.kind == kind)
            .ok_or(CoreError::UnknownAbility(kind))
    }

    pub fn definition(&self, kind: AbilityKind) -> Result<&AbilityDefinition> {
        Ok(&self.entry(kind)?.definition)
    }

    pub fn runtime(&self, kind: AbilityKind) -> Result<&AbilityRuntime> {
        Ok(&self.entry(kind)?.runtime)
    }

    /// Advance every running cooldown, floored at zero.
    pub fn tick_cooldowns(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        for entry in &mut self.entries {
            entry.runtime.tick(dt);
        }
    }

    /// Arm the cooldown with a fresh sample from the definition's range.
    /// Returns the drawn cooldown.
    pub fn start_cooldown(&mut self, kind: AbilityKind, rng: &mut impl Rng) -> Result<f32> {
        let entry = self.entry_mut(kind)?;
        let cooldown = entry.definition.cooldown_range.sample(rng).max(0.0);
        entry.runtime.cooldown_remaining = cooldown;
        Ok(cooldown)
    }

    pub fn is_on_cooldown(&self, kind: AbilityKind) -> Result<bool> {
        Ok(self.entry(kind)?.runtime.is_on_cooldown())
    }

    pub fn cooldown_remaining(&self, kind: AbilityKind) -> Result<f32> {
        Ok(self.entry(kind)?.runtime.cooldown_remaining())
    }

    // Independent uniform draws; callers wanting one stable roll per cast
    // must sample once and reuse the value.

    pub fn random_power(&self, kind: AbilityKind, rng: &mut impl Rng) -> Result<f32> {
        Ok(self.entry(kind)?.definition.random_power(rng))
    }

    pub fn random_duration(&self, kind: AbilityKind, rng: &mut impl Rng) -> Result<f32> {
        Ok(self.entry(kind)?.definition.random_duration(rng))
    }

    pub fn random_cooldown(&self, kind: AbilityKind, rng: &mut impl Rng) -> Result<f32> {
        Ok(self.entry(kind)?.definition.random_cooldown(rng))
    }

    pub fn random_cost(&self, kind: AbilityKind, rng: &mut impl Rng) -> Result<f32> {
        Ok(self.entry(kind)?.definition.random_cost(rng))
    }
}
