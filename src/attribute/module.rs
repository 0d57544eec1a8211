//! A single bounded attribute quantity
//!
//! Invariant: `min <= current <= max` holds after every mutation. The
//! invariant is enforced by clamping, never by rejecting the mutation.

use serde::{Deserialize, Serialize};

/// Snapshot of an attribute's bounds and current value.
///
/// This is the payload of every attribute change notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeValues {
    pub min: f32,
    pub max: f32,
    pub current: f32,
}

/// One bounded numeric quantity with regeneration and depletion rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeModule {
    min: f32,
    max: f32,
    current: f32,
    update_enabled: bool,
    /// Regeneration per second, applied by the tick path
    regen_rate: f32,
    /// Depletion per second, read by drain-style collaborators
    deplete_rate: f32,
}

impl Default for AttributeModule {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            current: 100.0,
            update_enabled: true,
            regen_rate: 1.0,
            deplete_rate: 1.0,
        }
    }
}

/// Clamp that tolerates inverted bounds instead of panicking.
fn clamped(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

impl AttributeModule {
    pub fn new(min: f32, max: f32, current: f32) -> Self {
        let mut module = Self::default();
        module.set_value(min, max, current);
        module
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn is_update_enabled(&self) -> bool {
        self.update_enabled
    }

    pub fn regen_rate(&self) -> f32 {
        self.regen_rate
    }

    pub fn deplete_rate(&self) -> f32 {
        self.deplete_rate
    }

    pub fn values(&self) -> AttributeValues {
        AttributeValues {
            min: self.min,
            max: self.max,
            current: self.current,
        }
    }

    /// True while the attribute holds any value above zero.
    pub fn has_value(&self) -> bool {
        self.current > 0.0
    }

    /// Replace bounds and current value. The supplied current is clamped
    /// into the supplied bounds before storage.
    pub fn set_value(&mut self, min: f32, max: f32, current: f32) -> AttributeValues {
        self.min = min;
        self.max = max;
        self.current = clamped(current, min, max);
        self.values()
    }

    pub fn set_update_enabled(&mut self, enabled: bool) {
        self.update_enabled = enabled;
    }

    /// Rates are per-second and never negative.
    pub fn set_regen_rate(&mut self, rate: f32) {
        self.regen_rate = rate.max(0.0);
    }

    pub fn set_deplete_rate(&mut self, rate: f32) {
        self.deplete_rate = rate.max(0.0);
    }

    /// Advance regeneration by `dt` seconds.
    ///
    /// Returns the new snapshot when the value changed, `None` when the
    /// module is disabled, already saturated, or `dt` is not positive —
    /// saturated modules stay silent so consumers see no redundant
    /// notifications.
    pub fn tick_regenerate(&mut self, dt: f32) -> Option<AttributeValues> {
        if !self.update_enabled || dt <= 0.0 {
            return None;
        }
        if self.current >= self.max {
            return None;
        }

        self.current = clamped(self.current + self.regen_rate * dt, self.min, self.max);
        Some(self.values())
    }

    /// Add to the current value, clamped at max.
    pub fn restore(&mut self, amount: f32) -> Option<AttributeValues> {
        if amount <= 0.0 || self.current >= self.max {
            return None;
        }
        self.current = clamped(self.current + amount, self.min, self.max);
        Some(self.values())
    }

    /// Subtract from the current value, clamped at min.
    pub fn deplete(&mut self, amount: f32) -> Option<AttributeValues> {
        if amount <= 0.0 || self.current <= self.min {
            return None;
        }
        self.current = clamped(self.current - amount, self.min, self.max);
        Some(self.values())
    }
}
