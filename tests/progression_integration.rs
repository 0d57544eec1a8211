//! Progression curve integration tests
//!
//! Verifies the generated threshold table's shape, the experience
//! consumption loop, the cap-saturation policy, and the reward-bonus read
//! used by the kill-reward collaborator.

use vanguard_core::character::{CharacterState, Role};
use vanguard_core::core::config::SimConfig;
use vanguard_core::progression::{Progression, ThresholdTable};
use vanguard_core::simulation::SimulationDriver;

#[test]
fn test_reference_table_properties() {
    let table = ThresholdTable::generate(100, 10, 100.0, 1.1);

    assert_eq!(table.len(), 101);
    assert_eq!(table.get(0), Some(0.0));

    for window in table.thresholds().windows(2) {
        assert!(window[1] >= window[0], "table must be non-decreasing");
    }
    for value in table.thresholds() {
        assert_eq!(value % 10.0, 0.0, "every entry is a multiple of 10");
    }
}

#[test]
fn test_table_is_reproducible_from_parameters_alone() {
    let config = SimConfig::default();
    let a = Progression::from_config(&config);
    let b = Progression::from_config(&config);
    assert_eq!(a.table(), b.table());
    assert_eq!(a.table(), &ThresholdTable::with_defaults());
}

#[test]
fn test_split_experience_matches_single_grant_from_any_start() {
    for start_level in 1..30 {
        let mut split = Progression::new();
        let mut single = Progression::new();
        split.set_level(start_level);
        single.set_level(start_level);

        split.add_experience(30.0);
        split.add_experience(70.0);
        single.add_experience(100.0);

        assert_eq!(
            split.level(),
            single.level(),
            "level diverged from start {start_level}"
        );
        assert!(
            (split.experience() - single.experience()).abs() < 1e-3,
            "experience diverged from start {start_level}"
        );
    }
}

#[test]
fn test_level_five_crossing_scenario() {
    let mut progression = Progression::new();
    progression.set_level(5);
    let required = progression.table().get_or_zero(4);

    progression.add_experience(required + 5.0);

    assert_eq!(progression.level(), 6);
    assert!((progression.experience() - 5.0).abs() < 1e-3);
}

#[test]
fn test_cap_saturation_policy() {
    let mut progression = Progression::new();
    progression.set_level(100);

    progression.add_experience(1.0);
    progression.add_experience(1_000_000.0);

    assert_eq!(progression.level(), 100);
    assert_eq!(progression.experience(), 0.0);
}

#[test]
fn test_kill_reward_flows_between_characters() {
    let mut driver = SimulationDriver::new();

    let mut victim = CharacterState::with_role(Role::Ai);
    victim.add_experience(2000.0);
    let victim_bonus = victim.reward_bonus();
    assert!(victim_bonus > 0);

    let killer_id = driver.register(CharacterState::with_role(Role::Player));
    let victim_id = driver.register(victim);
    driver.tick(0.0);

    driver.execute_damage(victim_id, 1000.0, 0.0).unwrap();
    assert!(driver.character(victim_id).unwrap().is_dead());

    let killer = driver.character_mut(killer_id).unwrap();
    let level_before = killer.progression().level();
    killer.add_experience(victim_bonus as f32);
    assert!(killer.progression().level() >= level_before);
}

#[test]
fn test_reward_bonus_tracks_level() {
    let mut low = Progression::new();
    let mut high = Progression::new();
    low.set_level(2);
    high.set_level(50);

    assert!(high.reward_bonus() > low.reward_bonus());
}

#[test]
fn test_custom_curve_from_config() {
    let config = SimConfig {
        max_level: 40,
        curve_segments: 8,
        curve_base_step: 50.0,
        curve_step_multiplier: 1.25,
        ..SimConfig::default()
    };
    config.validate().unwrap();

    let progression = Progression::from_config(&config);
    assert_eq!(progression.max_level(), 40);
    assert_eq!(progression.table().len(), 41);
    assert_eq!(progression.table().get(0), Some(0.0));
}
