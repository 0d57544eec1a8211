//! The per-tick orchestrator
//!
//! Owns every registered character, keyed by opaque [`EntityId`]. Two
//! cadences run here: regeneration every tick with the frame's delta, and
//! the fixed-period work (cooldowns, scheduled effects) as often as the
//! period has elapsed. All mutation is synchronous within a tick; nothing
//! blocks or suspends.

use ahash::AHashMap;

use crate::attribute::PrimaryAttribute;
use crate::character::{CharacterEvent, CharacterState, Role};
use crate::core::config::SimConfig;
use crate::core::error::{CoreError, Result};
use crate::core::types::{EntityId, Tick};
use crate::simulation::effect::ScheduledEffect;

/// External death handling, registered by the embedding layer.
///
/// The core only routes the notification; the reaction (respawn, score,
/// cleanup) lives outside.
pub trait DeathObserver {
    fn on_player_death(&mut self, id: EntityId);
    fn on_ai_death(&mut self, id: EntityId);
}

/// Time-based rate limiter for repeating per-tick diagnostics.
struct LogThrottle {
    interval: f32,
    elapsed: f32,
}

impl LogThrottle {
    fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    fn ready(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            return true;
        }
        false
    }
}

pub struct SimulationDriver {
    characters: AHashMap<EntityId, CharacterState>,
    effects: Vec<ScheduledEffect>,
    observers: Vec<Box<dyn DeathObserver>>,
    config: SimConfig,
    effect_accumulator: f32,
    current_tick: Tick,
    log_throttle: LogThrottle,
}

impl Default for SimulationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationDriver {
    pub fn new() -> Self {
        Self {
            characters: AHashMap::new(),
            effects: Vec::new(),
            observers: Vec::new(),
            config: SimConfig::default(),
            effect_accumulator: 0.0,
            current_tick: 0,
            log_throttle: LogThrottle::new(5.0),
        }
    }

    pub fn with_config(config: SimConfig) -> Result<Self> {
        config.validate().map_err(CoreError::InvalidContent)?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    // === Registry ===

    pub fn register(&mut self, character: CharacterState) -> EntityId {
        let id = EntityId::new();
        self.characters.insert(id, character);
        tracing::debug!(?id, "character registered");
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<CharacterState> {
        self.characters.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.characters.contains_key(&id)
    }

    pub fn character(&self, id: EntityId) -> Result<&CharacterState> {
        self.characters.get(&id).ok_or(CoreError::UnknownEntity(id))
    }

    pub fn character_mut(&mut self, id: EntityId) -> Result<&mut CharacterState> {
        self.characters
            .get_mut(&id)
            .ok_or(CoreError::UnknownEntity(id))
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.characters.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn add_observer(&mut self, observer: Box<dyn DeathObserver>) {
        self.observers.push(observer);
    }

    pub fn active_effects(&self) -> &[ScheduledEffect] {
        &self.effects
    }

    // === Tick ===

    /// Advance the simulation by `dt` seconds.
    ///
    /// Regeneration runs once with the full delta; the fixed cadence fires
    /// for every elapsed effect period. Returns the change notifications
    /// drained from every character, each delivered exactly once in that
    /// character's causal mutation order.
    pub fn tick(&mut self, dt: f32) -> Vec<(EntityId, CharacterEvent)> {
        if dt > 0.0 {
            for character in self.characters.values_mut() {
                character.tick_regenerate(dt);
            }

            self.effect_accumulator += dt;
            while self.effect_accumulator >= self.config.effect_period {
                self.effect_accumulator -= self.config.effect_period;
                for character in self.characters.values_mut() {
                    character.tick_cooldowns(self.config.effect_period);
                }
                self.run_effect_step();
            }

            if self.log_throttle.ready(dt) {
                tracing::debug!(
                    tick = self.current_tick,
                    characters = self.characters.len(),
                    effects = self.effects.len(),
                    "simulation tick"
                );
            }
        }

        self.current_tick += 1;
        self.drain_events()
    }

    fn drain_events(&mut self) -> Vec<(EntityId, CharacterEvent)> {
        let mut events = Vec::new();
        for (id, character) in self.characters.iter_mut() {
            if !character.has_pending_events() {
                continue;
            }
            for event in character.drain_events() {
                if let CharacterEvent::Died { role } = &event {
                    match role {
                        Some(Role::Player) => {
                            for observer in &mut self.observers {
                                observer.on_player_death(*id);
                            }
                        }
                        Some(Role::Ai) => {
                            for observer in &mut self.observers {
                                observer.on_ai_death(*id);
                            }
                        }
                        None => {
                            tracing::error!(?id, "death with unset role reached the driver");
                        }
                    }
                }
                events.push((*id, event));
            }
        }
        events
    }

    /// One fixed-period step of the scheduled effects.
    ///
    /// Per (target, attribute) group the per-effect deltas sum and a single
    /// clamped write lands; one effect never overwrites another's result.
    /// Termination is checked cooperatively on every step: missing target,
    /// exhausted budget, or saturated attribute.
    fn run_effect_step(&mut self) {
        if self.effects.is_empty() {
            return;
        }

        let characters = &self.characters;
        self.effects
            .retain(|effect| !effect.is_exhausted() && characters.contains_key(&effect.target));

        let mut accumulated: AHashMap<(EntityId, PrimaryAttribute), f32> = AHashMap::new();
        for effect in &mut self.effects {
            let Some(character) = self.characters.get(&effect.target) else {
                continue;
            };
            let values = character.attributes().primary(effect.attribute).values();
            let key = (effect.target, effect.attribute);
            let already = accumulated.get(&key).copied().unwrap_or(0.0);
            let headroom = values.max - values.current - already;

            if headroom <= 0.0 {
                // Saturation terminates the effect, budget or not
                effect.consume(effect.remaining);
                continue;
            }

            let amount = effect.step_amount(headroom);
            if amount <= 0.0 {
                continue;
            }
            *accumulated.entry(key).or_insert(0.0) += amount;
            effect.consume(amount);
        }

        for ((target, attribute), delta) in accumulated {
            if let Some(character) = self.characters.get_mut(&target) {
                character.restore_primary(attribute, delta);
            }
        }

        // Effects that spent their budget (or hit saturation) this step
        // leave the active set immediately
        self.effects.retain(|effect| !effect.is_exhausted());
    }

    // === Cross-character operations ===

    /// Apply damage to a target's health through its own clamped setter.
    ///
    /// Returns the final damage after protection. The death transition, if
    /// any, follows from the target's health hand-off.
    pub fn execute_damage(&mut self, target: EntityId, damage: f32, protection: f32) -> Result<f32> {
        let final_damage = (damage - protection).max(0.0);
        let character = self.character_mut(target)?;

        let values = character.attributes().primary(PrimaryAttribute::Health).values();
        let applied = character.set_primary_attribute(
            PrimaryAttribute::Health,
            values.min,
            values.max,
            values.current - final_damage,
        );

        tracing::debug!(
            ?target,
            final_damage,
            health = applied.current,
            "damage applied"
        );
        Ok(final_damage)
    }

    /// Queue a bounded regeneration toward a target, paid out on the fixed
    /// cadence. Non-positive amounts are no-ops.
    pub fn schedule_regeneration(
        &mut self,
        target: EntityId,
        attribute: PrimaryAttribute,
        amount: f32,
    ) -> Result<()> {
        if amount <= 0.0 {
            return Ok(());
        }
        if !self.characters.contains_key(&target) {
            return Err(CoreError::UnknownEntity(target));
        }
        self.effects.push(ScheduledEffect::new(
            target,
            attribute,
            amount,
            self.config.effect_step,
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Deaths {
        players: Vec<EntityId>,
        ais: Vec<EntityId>,
    }

    struct RecordingObserver(Rc<RefCell<Deaths>>);

    impl DeathObserver for RecordingObserver {
        fn on_player_death(&mut self, id: EntityId) {
            self.0.borrow_mut().players.push(id);
        }

        fn on_ai_death(&mut self, id: EntityId) {
            self.0.borrow_mut().ais.push(id);
        }
    }

    fn driver_with(character: CharacterState) -> (SimulationDriver, EntityId) {
        let mut driver = SimulationDriver::new();
        let id = driver.register(character);
        (driver, id)
    }

    #[test]
    fn test_unknown_entity_is_an_error() {
        let mut driver = SimulationDriver::new();
        let ghost = EntityId::new();

        assert!(matches!(
            driver.character(ghost),
            Err(CoreError::UnknownEntity(_))
        ));
        assert!(driver.execute_damage(ghost, 10.0, 0.0).is_err());
        assert!(driver
            .schedule_regeneration(ghost, PrimaryAttribute::Health, 5.0)
            .is_err());
    }

    #[test]
    fn test_regeneration_runs_each_tick() {
        let mut character = CharacterState::with_role(Role::Ai);
        character.set_primary_attribute(PrimaryAttribute::Stamina, 0.0, 50.0, 10.0);
        character.set_regen_rate(PrimaryAttribute::Stamina.into(), 2.0);
        let (mut driver, id) = driver_with(character);
        driver.tick(0.0); // flush registration-time events

        for _ in 0..10 {
            driver.tick(0.5);
        }

        let stamina = driver
            .character(id)
            .unwrap()
            .current_value(PrimaryAttribute::Stamina.into());
        assert!((stamina - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_damage_routes_one_death_callback() {
        let deaths = Rc::new(RefCell::new(Deaths::default()));
        let (mut driver, id) = driver_with(CharacterState::with_role(Role::Player));
        driver.add_observer(Box::new(RecordingObserver(deaths.clone())));
        driver.tick(0.0);

        // Health defaults to 100; protection reduces the blow
        let applied = driver.execute_damage(id, 250.0, 30.0).unwrap();
        assert_eq!(applied, 220.0);

        let events = driver.tick(0.0);
        assert!(events
            .iter()
            .any(|(_, e)| matches!(e, CharacterEvent::Died { role: Some(Role::Player) })));
        assert_eq!(deaths.borrow().players, vec![id]);
        assert!(deaths.borrow().ais.is_empty());

        // No further death on subsequent ticks
        driver.tick(0.1);
        assert_eq!(deaths.borrow().players.len(), 1);
    }

    #[test]
    fn test_scheduled_effect_pays_out_on_the_fixed_cadence() {
        let mut character = CharacterState::with_role(Role::Ai);
        character.set_primary_attribute(PrimaryAttribute::Health, 0.0, 100.0, 50.0);
        character.set_update_enabled(PrimaryAttribute::Health.into(), false);
        let (mut driver, id) = driver_with(character);
        driver.tick(0.0);

        driver
            .schedule_regeneration(id, PrimaryAttribute::Health, 5.0)
            .unwrap();

        // Default cadence: 0.1 s period, 1 point per step -> 5 steps
        driver.tick(0.25);
        let mid = driver
            .character(id)
            .unwrap()
            .current_value(PrimaryAttribute::Health.into());
        assert!((mid - 52.0).abs() < 1e-3);

        driver.tick(0.35);
        let done = driver
            .character(id)
            .unwrap()
            .current_value(PrimaryAttribute::Health.into());
        assert!((done - 55.0).abs() < 1e-3);
        assert!(driver.active_effects().is_empty());
    }

    #[test]
    fn test_overlapping_effects_compose_additively() {
        let mut character = CharacterState::with_role(Role::Ai);
        character.set_primary_attribute(PrimaryAttribute::Health, 0.0, 100.0, 90.0);
        character.set_update_enabled(PrimaryAttribute::Health.into(), false);
        let (mut driver, id) = driver_with(character);
        driver.tick(0.0);

        driver
            .schedule_regeneration(id, PrimaryAttribute::Health, 8.0)
            .unwrap();
        driver
            .schedule_regeneration(id, PrimaryAttribute::Health, 8.0)
            .unwrap();

        // Both effects apply each step: 2 points per period
        driver.tick(0.1);
        let after_one = driver
            .character(id)
            .unwrap()
            .current_value(PrimaryAttribute::Health.into());
        assert!((after_one - 92.0).abs() < 1e-3);

        // Saturation at 100 terminates both without overshoot
        for _ in 0..10 {
            driver.tick(0.1);
        }
        let health = driver
            .character(id)
            .unwrap()
            .current_value(PrimaryAttribute::Health.into());
        assert_eq!(health, 100.0);
        assert!(driver.active_effects().is_empty());
    }

    #[test]
    fn test_effect_dropped_when_target_removed() {
        let (mut driver, id) = driver_with(CharacterState::with_role(Role::Ai));
        driver.tick(0.0);
        driver
            .schedule_regeneration(id, PrimaryAttribute::Energy, 50.0)
            .unwrap();

        driver.remove(id);
        driver.tick(0.1);

        assert!(driver.active_effects().is_empty());
    }

    #[test]
    fn test_cooldowns_advance_on_the_fixed_cadence() {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let (mut driver, id) = driver_with(CharacterState::with_role(Role::Player));
        driver.tick(0.0);

        let cast = driver
            .character_mut(id)
            .unwrap()
            .execute_ability(crate::ability::AbilityKind::CombatStrike, &mut rng)
            .unwrap();

        // Tick past the drawn cooldown in sub-period slices
        let mut elapsed = 0.0;
        while elapsed <= cast.cooldown + 0.2 {
            driver.tick(0.05);
            elapsed += 0.05;
        }

        assert!(!driver
            .character(id)
            .unwrap()
            .is_ability_on_cooldown(crate::ability::AbilityKind::CombatStrike)
            .unwrap());
    }
}
