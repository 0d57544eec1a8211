//! The character aggregate and its mutation API
//!
//! `CharacterState` exclusively owns its sub-objects; external collaborators
//! see read-only snapshots and the event queue. Death is not entered by the
//! state machine on its own: the primary-attribute setter performs the
//! health check and invokes the transition (the designed hand-off).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ability::{AbilityCatalog, AbilityDefinition, AbilityKind};
use crate::attribute::{
    AttributeKind, AttributeSet, AttributeValues, PrimaryAttribute, SecondaryAttribute,
};
use crate::character::event::CharacterEvent;
use crate::character::info::Information;
use crate::character::lifecycle::{LifecycleState, Role};
use crate::character::movement::MovementSettings;
use crate::core::error::{CoreError, Result};
use crate::progression::Progression;

/// The stable rolls of one ability activation.
///
/// Power, duration and cost are sampled once at cast time; re-reading the
/// catalog's random accessors would draw fresh values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbilityCast {
    pub kind: AbilityKind,
    pub power: f32,
    pub duration: f32,
    pub cost: f32,
    pub cooldown: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterState {
    lifecycle: LifecycleState,
    role: Option<Role>,
    info: Information,
    attributes: AttributeSet,
    abilities: AbilityCatalog,
    progression: Progression,
    movement: MovementSettings,
    #[serde(skip)]
    events: Vec<CharacterEvent>,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            lifecycle: LifecycleState::default(),
            role: None,
            info: Information::default(),
            attributes: AttributeSet::default(),
            abilities: AbilityCatalog::with_defaults(),
            progression: Progression::default(),
            movement: MovementSettings::default(),
            events: Vec::new(),
        }
    }
}

impl CharacterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }

    /// Replace the ability catalog (build-time content selection).
    pub fn with_abilities(mut self, abilities: AbilityCatalog) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    // === Lifecycle & role ===

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    /// Unconditionally overwrite the lifecycle state.
    ///
    /// Entering `Death` with an unset role is reported but still completes;
    /// the queued `Died` event then carries `role: None`.
    pub fn set_lifecycle(&mut self, state: LifecycleState) {
        self.lifecycle = state;
        self.events.push(CharacterEvent::LifecycleChanged { state });

        if state == LifecycleState::Death {
            if self.role.is_none() {
                tracing::error!(
                    title = %self.info.title,
                    "{}",
                    CoreError::InvalidRoleTransition
                );
            }
            self.events.push(CharacterEvent::Died { role: self.role });
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
        self.events.push(CharacterEvent::RoleChanged { role });
    }

    pub fn is_player(&self) -> bool {
        self.role == Some(Role::Player)
    }

    pub fn is_ai(&self) -> bool {
        self.role == Some(Role::Ai)
    }

    pub fn is_dead(&self) -> bool {
        self.lifecycle == LifecycleState::Death
    }

    // === Information ===

    pub fn title(&self) -> &str {
        &self.info.title
    }

    pub fn description(&self) -> &str {
        &self.info.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.info.title = title.into();
        self.events.push(CharacterEvent::TitleChanged {
            title: self.info.title.clone(),
        });
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.info.description = description.into();
        self.events.push(CharacterEvent::DescriptionChanged {
            description: self.info.description.clone(),
        });
    }

    // === Attributes ===

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn attribute_values(&self, kind: AttributeKind) -> AttributeValues {
        self.attributes.module(kind).values()
    }

    pub fn current_value(&self, kind: AttributeKind) -> f32 {
        self.attributes.module(kind).current()
    }

    pub fn has_primary_value(&self, kind: PrimaryAttribute) -> bool {
        self.attributes.primary(kind).has_value()
    }

    pub fn has_secondary_value(&self, kind: SecondaryAttribute) -> bool {
        self.attributes.secondary(kind).has_value()
    }

    /// Set a primary attribute's bounds and value (clamped on write).
    ///
    /// Health reaching zero hands off to the death transition; the
    /// attribute event is queued before the lifecycle events.
    pub fn set_primary_attribute(
        &mut self,
        kind: PrimaryAttribute,
        min: f32,
        max: f32,
        current: f32,
    ) -> AttributeValues {
        let values = self.attributes.primary_mut(kind).set_value(min, max, current);
        self.events.push(CharacterEvent::AttributeChanged {
            kind: kind.into(),
            values,
        });

        if kind == PrimaryAttribute::Health && values.current <= 0.0 && !self.is_dead() {
            self.set_lifecycle(LifecycleState::Death);
        }

        values
    }

    pub fn set_secondary_attribute(
        &mut self,
        kind: SecondaryAttribute,
        min: f32,
        max: f32,
        current: f32,
    ) -> AttributeValues {
        let values = self
            .attributes
            .secondary_mut(kind)
            .set_value(min, max, current);
        self.events.push(CharacterEvent::AttributeChanged {
            kind: kind.into(),
            values,
        });
        values
    }

    pub fn set_update_enabled(&mut self, kind: AttributeKind, enabled: bool) {
        self.attributes.module_mut(kind).set_update_enabled(enabled);
    }

    pub fn set_regen_rate(&mut self, kind: AttributeKind, rate: f32) {
        self.attributes.module_mut(kind).set_regen_rate(rate);
    }

    /// Restore a primary attribute by a clamped amount (heal path).
    pub fn restore_primary(&mut self, kind: PrimaryAttribute, amount: f32) -> AttributeValues {
        if let Some(values) = self.attributes.primary_mut(kind).restore(amount) {
            self.events.push(CharacterEvent::AttributeChanged {
                kind: kind.into(),
                values,
            });
        }
        self.attributes.primary(kind).values()
    }

    /// Advance regeneration on the four primary pools. Called by the
    /// driver once per simulation tick; order among the four carries no
    /// meaning.
    pub fn tick_regenerate(&mut self, dt: f32) {
        for kind in PrimaryAttribute::ALL {
            if let Some(values) = self.attributes.primary_mut(kind).tick_regenerate(dt) {
                self.events.push(CharacterEvent::AttributeChanged {
                    kind: kind.into(),
                    values,
                });
            }
        }
    }

    // === Abilities ===

    pub fn abilities(&self) -> &AbilityCatalog {
        &self.abilities
    }

    pub fn ability_definition(&self, kind: AbilityKind) -> Result<&AbilityDefinition> {
        self.abilities.definition(kind)
    }

    pub fn is_ability_on_cooldown(&self, kind: AbilityKind) -> Result<bool> {
        self.abilities.is_on_cooldown(kind)
    }

    /// Advance ability cooldowns. Driven by the fixed cadence, not the
    /// per-frame tick.
    pub fn tick_cooldowns(&mut self, dt: f32) {
        self.abilities.tick_cooldowns(dt);
    }

    /// Activate an ability: one stable roll of power/duration/cost, cost
    /// paid from the definition's cost attribute (clamped — mutations in
    /// this core clamp, never reject), cooldown armed from a fresh sample.
    pub fn execute_ability(&mut self, kind: AbilityKind, rng: &mut impl Rng) -> Result<AbilityCast> {
        if self.abilities.is_on_cooldown(kind)? {
            return Err(CoreError::AbilityOnCooldown(kind));
        }

        let (cost_kind, power, duration, cost) = {
            let definition = self.abilities.definition(kind)?;
            (
                definition.cost_kind,
                definition.random_power(rng),
                definition.random_duration(rng),
                definition.random_cost(rng),
            )
        };

        if let Some(values) = self.attributes.primary_mut(cost_kind).deplete(cost) {
            self.events.push(CharacterEvent::AttributeChanged {
                kind: cost_kind.into(),
                values,
            });
        }

        let cooldown = self.abilities.start_cooldown(kind, rng)?;
        self.events.push(CharacterEvent::AbilityExecuted { kind });

        Ok(AbilityCast {
            kind,
            power,
            duration,
            cost,
            cooldown,
        })
    }

    // === Progression ===

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Grant experience; levels gained queue `LevelChanged` after the
    /// experience event. No-ops (non-positive amounts, at-cap) queue
    /// nothing.
    pub fn add_experience(&mut self, amount: f32) -> u32 {
        if amount <= 0.0 || self.progression.is_at_cap() {
            return 0;
        }

        let gained = self.progression.add_experience(amount);
        self.events.push(CharacterEvent::ExperienceChanged {
            experience: self.progression.experience(),
            level: self.progression.level(),
        });
        if gained > 0 {
            self.events.push(CharacterEvent::LevelChanged {
                level: self.progression.level(),
            });
        }
        gained
    }

    pub fn reward_bonus(&self) -> i32 {
        self.progression.reward_bonus()
    }

    // === Upgrade points ===

    pub fn grant_upgrade_points(&mut self, amount: u32) {
        let available = self.attributes.grant_upgrade_points(amount);
        self.events
            .push(CharacterEvent::UpgradePointsChanged { available });
    }

    pub fn spend_upgrade_point(&mut self) -> bool {
        if !self.attributes.spend_upgrade_point() {
            return false;
        }
        self.events.push(CharacterEvent::UpgradePointsChanged {
            available: self.attributes.upgrade_points(),
        });
        true
    }

    // === Movement passthrough ===

    pub fn movement(&self) -> &MovementSettings {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut MovementSettings {
        &mut self.movement
    }

    // === Events ===

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Take the queued change notifications. Each event is delivered
    /// exactly once; ordering is causal mutation order.
    pub fn drain_events(&mut self) -> Vec<CharacterEvent> {
        std::mem::take(&mut self.events)
    }
}
