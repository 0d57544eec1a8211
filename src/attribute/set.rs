//! The nine fixed attributes of a character
//!
//! Modules are owned by fixed identity, not a dynamic collection; by-kind
//! dispatch is an exhaustive match over the closed kind enums.

use serde::{Deserialize, Serialize};

use crate::attribute::kinds::{AttributeKind, PrimaryAttribute, SecondaryAttribute};
use crate::attribute::module::AttributeModule;

/// Nine named attribute modules plus the upgrade-point counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    health: AttributeModule,
    stamina: AttributeModule,
    energy: AttributeModule,
    shield: AttributeModule,
    output: AttributeModule,
    actuation: AttributeModule,
    integrity: AttributeModule,
    capacity: AttributeModule,
    regeneration: AttributeModule,
    upgrade_points: u32,
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self {
            health: AttributeModule::new(0.0, 100.0, 100.0),
            stamina: AttributeModule::new(0.0, 50.0, 50.0),
            energy: AttributeModule::new(0.0, 50.0, 50.0),
            shield: AttributeModule::new(0.0, 25.0, 25.0),
            output: AttributeModule::new(10.0, 100.0, 10.0),
            actuation: AttributeModule::new(15.0, 50.0, 15.0),
            integrity: AttributeModule::new(20.0, 80.0, 20.0),
            capacity: AttributeModule::new(10.0, 50.0, 10.0),
            regeneration: AttributeModule::new(2.0, 20.0, 2.0),
            upgrade_points: 0,
        }
    }
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self, kind: PrimaryAttribute) -> &AttributeModule {
        match kind {
            PrimaryAttribute::Health => &self.health,
            PrimaryAttribute::Stamina => &self.stamina,
            PrimaryAttribute::Energy => &self.energy,
            PrimaryAttribute::Shield => &self.shield,
        }
    }

    pub fn primary_mut(&mut self, kind: PrimaryAttribute) -> &mut AttributeModule {
        match kind {
            PrimaryAttribute::Health => &mut self.health,
            PrimaryAttribute::Stamina => &mut self.stamina,
            PrimaryAttribute::Energy => &mut self.energy,
            PrimaryAttribute::Shield => &mut self.shield,
        }
    }

    pub fn secondary(&self, kind: SecondaryAttribute) -> &AttributeModule {
        match kind {
            SecondaryAttribute::Output => &self.output,
            SecondaryAttribute::Actuation => &self.actuation,
            SecondaryAttribute::Integrity => &self.integrity,
            SecondaryAttribute::Capacity => &self.capacity,
            SecondaryAttribute::Regeneration => &self.regeneration,
        }
    }

    pub fn secondary_mut(&mut self, kind: SecondaryAttribute) -> &mut AttributeModule {
        match kind {
            SecondaryAttribute::Output => &mut self.output,
            SecondaryAttribute::Actuation => &mut self.actuation,
            SecondaryAttribute::Integrity => &mut self.integrity,
            SecondaryAttribute::Capacity => &mut self.capacity,
            SecondaryAttribute::Regeneration => &mut self.regeneration,
        }
    }

    pub fn module(&self, kind: AttributeKind) -> &AttributeModule {
        match kind {
            AttributeKind::Primary(kind) => self.primary(kind),
            AttributeKind::Secondary(kind) => self.secondary(kind),
        }
    }

    pub fn module_mut(&mut self, kind: AttributeKind) -> &mut AttributeModule {
        match kind {
            AttributeKind::Primary(kind) => self.primary_mut(kind),
            AttributeKind::Secondary(kind) => self.secondary_mut(kind),
        }
    }

    pub fn upgrade_points(&self) -> u32 {
        self.upgrade_points
    }

    pub fn grant_upgrade_points(&mut self, amount: u32) -> u32 {
        self.upgrade_points = self.upgrade_points.saturating_add(amount);
        self.upgrade_points
    }

    /// Spend one upgrade point. Returns false when none are available.
    pub fn spend_upgrade_point(&mut self) -> bool {
        if self.upgrade_points == 0 {
            return false;
        }
        self.upgrade_points -= 1;
        true
    }
}
