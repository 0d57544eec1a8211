//! Scheduled multi-tick effects
//!
//! A scheduled effect is a bounded mutation paid out over several fixed
//! periods (heal-over-time and the like), distinct from continuous
//! per-tick regeneration. Effects are plain records polled by the driver;
//! termination is cooperative — the condition is checked on every step,
//! nothing is preemptively cancelled.

use serde::{Deserialize, Serialize};

use crate::attribute::PrimaryAttribute;
use crate::core::types::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEffect {
    /// Target resolved through the driver registry on every step
    pub target: EntityId,
    pub attribute: PrimaryAttribute,
    /// Remaining budget, in attribute points
    pub remaining: f32,
    /// Upper bound applied per fixed period
    pub per_step_cap: f32,
}

impl ScheduledEffect {
    pub fn new(
        target: EntityId,
        attribute: PrimaryAttribute,
        amount: f32,
        per_step_cap: f32,
    ) -> Self {
        Self {
            target,
            attribute,
            remaining: amount.max(0.0),
            per_step_cap: per_step_cap.max(0.0),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Amount this effect wants to apply this step given the headroom
    /// left on the target attribute.
    pub fn step_amount(&self, headroom: f32) -> f32 {
        self.per_step_cap.min(self.remaining).min(headroom.max(0.0))
    }

    pub fn consume(&mut self, applied: f32) {
        self.remaining = (self.remaining - applied).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_amount_is_triple_min() {
        let effect = ScheduledEffect::new(EntityId::new(), PrimaryAttribute::Health, 10.0, 1.0);

        assert_eq!(effect.step_amount(100.0), 1.0); // capped by per-step
        assert_eq!(effect.step_amount(0.5), 0.5); // capped by headroom
        assert_eq!(effect.step_amount(-3.0), 0.0); // saturated target

        let mut tail = effect.clone();
        tail.remaining = 0.25;
        assert_eq!(tail.step_amount(100.0), 0.25); // capped by budget
    }

    #[test]
    fn test_consume_floors_at_zero() {
        let mut effect = ScheduledEffect::new(EntityId::new(), PrimaryAttribute::Energy, 2.0, 1.0);
        effect.consume(1.0);
        assert!(!effect.is_exhausted());
        effect.consume(1.5);
        assert!(effect.is_exhausted());
        assert_eq!(effect.remaining, 0.0);
    }

    #[test]
    fn test_negative_amounts_normalized() {
        let effect = ScheduledEffect::new(EntityId::new(), PrimaryAttribute::Shield, -5.0, -1.0);
        assert!(effect.is_exhausted());
        assert_eq!(effect.per_step_cap, 0.0);
    }
}
