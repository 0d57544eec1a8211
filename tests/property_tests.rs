//! Property tests for the numeric invariants
//!
//! The clamp invariant and the threshold-table shape must hold for any
//! input, not just the reference content values.

use proptest::prelude::*;

use vanguard_core::attribute::AttributeModule;
use vanguard_core::progression::{Progression, ThresholdTable};

proptest! {
    /// After set_value, `min <= current <= max` even when the supplied
    /// current is far out of range.
    #[test]
    fn prop_set_value_clamps(
        min in -1000.0_f32..1000.0,
        span in 0.0_f32..1000.0,
        current in -10_000.0_f32..10_000.0,
    ) {
        let max = min + span;
        let mut module = AttributeModule::default();

        let values = module.set_value(min, max, current);

        prop_assert!(values.current >= min);
        prop_assert!(values.current <= max);
        prop_assert_eq!(values.min, min);
        prop_assert_eq!(values.max, max);
    }

    /// Repeated regeneration never escapes the bounds, for any rate and
    /// any sequence of step sizes.
    #[test]
    fn prop_regeneration_stays_bounded(
        start in 0.0_f32..100.0,
        rate in 0.0_f32..50.0,
        steps in proptest::collection::vec(0.0_f32..0.5, 1..50),
    ) {
        let mut module = AttributeModule::new(0.0, 100.0, start);
        module.set_regen_rate(rate);

        for dt in steps {
            module.tick_regenerate(dt);
            prop_assert!(module.current() >= 0.0);
            prop_assert!(module.current() <= 100.0);
        }
    }

    /// Generated tables are always well-formed: correct length, zero
    /// origin, non-decreasing, every entry a multiple of 10.
    #[test]
    fn prop_threshold_table_shape(
        max_level in 1_i32..200,
        segments in 1_i32..20,
        base_step in 10.0_f32..500.0,
        multiplier in 1.0_f32..1.5,
    ) {
        let table = ThresholdTable::generate(max_level, segments, base_step, multiplier);

        prop_assert_eq!(table.len(), max_level as usize + 1);
        prop_assert_eq!(table.get(0), Some(0.0));
        for window in table.thresholds().windows(2) {
            prop_assert!(window[1] >= window[0]);
        }
        for value in table.thresholds() {
            prop_assert_eq!(value % 10.0, 0.0);
        }
    }

    /// Splitting an experience grant never changes the outcome.
    #[test]
    fn prop_experience_grants_compose(
        start_level in 1_i32..99,
        first in 1.0_f32..500.0,
        second in 1.0_f32..500.0,
    ) {
        let mut split = Progression::new();
        let mut single = Progression::new();
        split.set_level(start_level);
        single.set_level(start_level);

        split.add_experience(first);
        split.add_experience(second);
        single.add_experience(first + second);

        prop_assert_eq!(split.level(), single.level());
        prop_assert!((split.experience() - single.experience()).abs() < 1e-2);
    }

    /// The cap is absorbing: once at max level, experience stays zero.
    #[test]
    fn prop_cap_is_absorbing(amount in 0.0_f32..1.0e6) {
        let mut progression = Progression::new();
        progression.set_level(100);

        progression.add_experience(amount);

        prop_assert_eq!(progression.level(), 100);
        prop_assert_eq!(progression.experience(), 0.0);
    }
}
