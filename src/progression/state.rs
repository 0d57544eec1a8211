//! Level and experience state
//!
//! Level-ups consume experience from the pool rather than resetting it, so
//! fractional overflow is never lost below the cap. Experience remaining
//! when the cap is reached is discarded (cap-saturation policy).

use serde::{Deserialize, Serialize};

use crate::core::config::SimConfig;
use crate::progression::table::ThresholdTable;

/// Level/experience state tracked against a threshold table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    experience: f32,
    level: i32,
    table: ThresholdTable,
    /// Flat base of the kill-reward bonus formula
    reward_bonus_base: f32,
}

impl Default for Progression {
    fn default() -> Self {
        Self::with_table(ThresholdTable::with_defaults(), 30.0)
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: ThresholdTable, reward_bonus_base: f32) -> Self {
        Self {
            experience: 0.0,
            level: 1,
            table,
            reward_bonus_base,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::with_table(
            ThresholdTable::generate(
                config.max_level,
                config.curve_segments,
                config.curve_base_step,
                config.curve_step_multiplier,
            ),
            config.reward_bonus_base,
        )
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn max_level(&self) -> i32 {
        self.table.max_level()
    }

    pub fn is_at_cap(&self) -> bool {
        self.level >= self.max_level()
    }

    pub fn table(&self) -> &ThresholdTable {
        &self.table
    }

    /// Experience required to advance from the current level.
    pub fn next_level_requirement(&self) -> f32 {
        self.table.get_or_zero(self.level - 1)
    }

    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(1, self.max_level());
    }

    /// Add experience to the pool and consume it into level-ups.
    ///
    /// Returns the number of levels gained. Non-positive amounts and calls
    /// at the cap are no-ops; leftover experience below the cap is
    /// retained, leftover at the cap is discarded.
    pub fn add_experience(&mut self, amount: f32) -> u32 {
        if amount <= 0.0 || self.is_at_cap() {
            return 0;
        }

        self.experience += amount;

        let mut gained = 0;
        while self.level < self.max_level() {
            let required = self.table.get_or_zero(self.level - 1);
            if self.experience < required {
                break;
            }
            self.experience -= required;
            self.level += 1;
            gained += 1;
        }

        if self.is_at_cap() {
            self.experience = 0.0;
        }

        gained
    }

    /// Remove experience from the pool, floored at zero. Never un-levels.
    pub fn decrease_experience(&mut self, amount: f32) {
        if amount <= 0.0 {
            return;
        }
        self.experience = (self.experience - amount).max(0.0);
    }

    /// Direct single-level increment, capped at max level.
    pub fn level_up(&mut self) -> bool {
        if self.is_at_cap() {
            tracing::warn!(level = self.level, "level_up: already at maximum level");
            return false;
        }
        self.level += 1;
        true
    }

    /// Experience bonus granted to whoever defeats this character.
    ///
    /// `round(base + level * 2 + thresholds[level] / 100)`; a threshold read
    /// past the table substitutes 0 so the formula stays total.
    pub fn reward_bonus(&self) -> i32 {
        let next_threshold = self.table.get_or_zero(self.level);
        (self.reward_bonus_base + self.level as f32 * 2.0 + next_threshold / 100.0).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_level_one() {
        let progression = Progression::new();
        assert_eq!(progression.level(), 1);
        assert_eq!(progression.experience(), 0.0);
        assert_eq!(progression.max_level(), 100);
    }

    #[test]
    fn test_level_five_scenario() {
        // At level 5 the requirement is thresholds[4]; crossing it by 5
        // leaves level 6 with 5 experience banked.
        let mut progression = Progression::new();
        progression.set_level(5);
        let required = progression.table().get_or_zero(4);

        let gained = progression.add_experience(required + 5.0);

        assert_eq!(gained, 1);
        assert_eq!(progression.level(), 6);
        assert!((progression.experience() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_split_grants_match_single_grant() {
        let mut split = Progression::new();
        let mut single = Progression::new();
        split.set_level(3);
        single.set_level(3);

        split.add_experience(30.0);
        split.add_experience(70.0);
        single.add_experience(100.0);

        assert_eq!(split.level(), single.level());
        assert!((split.experience() - single.experience()).abs() < 1e-3);
    }

    #[test]
    fn test_multi_level_grant() {
        let mut progression = Progression::new();
        progression.set_level(2);

        // Levels 2 and 3 require 100 and 200; 350 crosses both
        let gained = progression.add_experience(350.0);

        assert_eq!(gained, 2);
        assert_eq!(progression.level(), 4);
        assert!((progression.experience() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_cap_is_a_noop() {
        let mut progression = Progression::new();
        progression.set_level(100);

        assert_eq!(progression.add_experience(10_000.0), 0);
        assert_eq!(progression.level(), 100);
        assert_eq!(progression.experience(), 0.0);
    }

    #[test]
    fn test_leftover_discarded_at_cap() {
        let mut progression = Progression::new();
        progression.set_level(99);
        let required = progression.table().get_or_zero(98);

        let gained = progression.add_experience(required + 777.0);

        assert_eq!(gained, 1);
        assert_eq!(progression.level(), 100);
        assert_eq!(progression.experience(), 0.0);
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut progression = Progression::new();
        progression.set_level(5);
        progression.add_experience(10.0);

        assert_eq!(progression.add_experience(0.0), 0);
        assert_eq!(progression.add_experience(-50.0), 0);
        assert!((progression.experience() - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_decrease_experience_floors_at_zero() {
        let mut progression = Progression::new();
        progression.set_level(5);
        progression.add_experience(10.0);

        progression.decrease_experience(4.0);
        assert!((progression.experience() - 6.0).abs() < 1e-3);

        progression.decrease_experience(100.0);
        assert_eq!(progression.experience(), 0.0);
        assert_eq!(progression.level(), 5);

        // Negative amounts do not add experience
        progression.decrease_experience(-100.0);
        assert_eq!(progression.experience(), 0.0);
    }

    #[test]
    fn test_level_up_caps() {
        let mut progression = Progression::new();
        progression.set_level(99);
        assert!(progression.level_up());
        assert!(!progression.level_up());
        assert_eq!(progression.level(), 100);
    }

    #[test]
    fn test_reward_bonus_formula() {
        let progression = Progression::new();
        // base 30 + level 1 * 2 + thresholds[1] (100) / 100
        assert_eq!(progression.reward_bonus(), 33);

        let mut capped = Progression::new();
        capped.set_level(100);
        // thresholds[100] exists; the formula stays in bounds at the cap
        let expected =
            (30.0 + 200.0 + capped.table().get_or_zero(100) / 100.0).round() as i32;
        assert_eq!(capped.reward_bonus(), expected);
    }

    #[test]
    fn test_reward_bonus_on_short_table() {
        let table = ThresholdTable::generate(2, 1, 100.0, 1.1);
        let mut progression = Progression::with_table(table, 30.0);
        progression.set_level(2);

        // base 30 + level 2 * 2 + thresholds[2] (200) / 100
        assert_eq!(progression.reward_bonus(), 36);
    }
}
