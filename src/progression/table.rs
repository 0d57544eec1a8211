//! Experience threshold table generation
//!
//! The curve is built in segments covering `max_level / segments` levels
//! each. Within a segment the per-level step is constant; the step is
//! multiplied once per completed segment, so the curve is locally linear
//! and globally super-linear. Generation is fully deterministic from its
//! four parameters.

use serde::{Deserialize, Serialize};

/// Ordered experience costs, indexed by level. Entry 0 is fixed at 0;
/// entry L is the cost of advancing from level L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    thresholds: Vec<f32>,
}

/// Round to the nearest multiple of 10 so thresholds read as content values.
fn round_to_ten(value: f32) -> f32 {
    (value / 10.0).round() * 10.0
}

impl ThresholdTable {
    /// Generate a table with `max_level + 1` entries.
    ///
    /// Degenerate parameters are lifted to their minimums (one level, one
    /// segment) rather than rejected; levels that do not divide evenly into
    /// segments are appended to the final segment at its step.
    pub fn generate(max_level: i32, segments: i32, base_step: f32, step_multiplier: f32) -> Self {
        let max_level = max_level.max(1);
        let segments = segments.max(1);

        let mut thresholds = Vec::with_capacity(max_level as usize + 1);
        thresholds.push(0.0); // level 0

        let levels_per_segment = max_level / segments;
        let mut current = 0.0_f32;
        let mut step = base_step;

        for _ in 0..segments {
            for _ in 0..levels_per_segment {
                current += step;
                thresholds.push(round_to_ten(current));
            }
            step *= step_multiplier;
        }

        // Remainder levels when max_level is not divisible by segments
        let remaining = max_level as usize + 1 - thresholds.len();
        for _ in 0..remaining {
            current += step;
            thresholds.push(round_to_ten(current));
        }

        Self { thresholds }
    }

    /// The reference curve: 100 levels, 10 segments, base step 100, x1.1.
    pub fn with_defaults() -> Self {
        Self::generate(100, 10, 100.0, 1.1)
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn max_level(&self) -> i32 {
        self.thresholds.len() as i32 - 1
    }

    pub fn get(&self, level: i32) -> Option<f32> {
        usize::try_from(level)
            .ok()
            .and_then(|i| self.thresholds.get(i))
            .copied()
    }

    /// Threshold lookup that substitutes 0 past the end of the table,
    /// keeping reward and experience math total.
    pub fn get_or_zero(&self, level: i32) -> f32 {
        self.get(level).unwrap_or(0.0)
    }

    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
