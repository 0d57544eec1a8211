//! Simulation configuration with documented constants
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

/// Configuration for the character simulation core
///
/// These values are reference content, not part of the contract; changing
/// them affects pacing and feel, not correctness.
#[derive(Debug, Clone)]
pub struct SimConfig {
    // === SCHEDULED EFFECTS ===
    /// Period of the fixed-cadence work (seconds)
    ///
    /// Ability cooldowns and scheduled effects advance once per elapsed
    /// period, independent of the frame rate. The main tick accumulates
    /// delta time and fires this cadence as often as it has elapsed.
    pub effect_period: f32,

    /// Maximum amount a scheduled effect applies per period
    ///
    /// A heal-over-time of 10 points with a cap of 1.0 takes 10 periods
    /// (one second at the default period) to pay out.
    pub effect_step: f32,

    // === PROGRESSION CURVE ===
    /// Highest reachable level; the threshold table has max_level + 1 entries
    pub max_level: i32,

    /// Number of segments the threshold curve is built from
    ///
    /// Step growth is piecewise-constant within a segment, so the curve is
    /// locally linear and globally super-linear.
    pub curve_segments: i32,

    /// Experience step for the first segment
    pub curve_base_step: f32,

    /// Multiplier applied to the step once per completed segment
    pub curve_step_multiplier: f32,

    /// Flat base of the kill-reward bonus formula
    pub reward_bonus_base: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Scheduled effects (10 Hz, one point per step)
            effect_period: 0.1,
            effect_step: 1.0,

            // Progression curve
            max_level: 100,
            curve_segments: 10,
            curve_base_step: 100.0,
            curve_step_multiplier: 1.1,
            reward_bonus_base: 30.0,
        }
    }
}

impl SimConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.effect_period <= 0.0 {
            return Err(format!(
                "effect_period ({}) must be positive",
                self.effect_period
            ));
        }

        if self.effect_step <= 0.0 {
            return Err(format!(
                "effect_step ({}) must be positive",
                self.effect_step
            ));
        }

        if self.curve_segments < 1 {
            return Err(format!(
                "curve_segments ({}) must be at least 1",
                self.curve_segments
            ));
        }

        if self.max_level < 1 {
            return Err(format!("max_level ({}) must be at least 1", self.max_level));
        }

        if self.curve_base_step <= 0.0 || self.curve_step_multiplier < 1.0 {
            return Err(format!(
                "curve step ({}, x{}) must be positive and non-shrinking",
                self.curve_base_step, self.curve_step_multiplier
            ));
        }

        Ok(())
    }
}
