//! Simulation orchestration
//!
//! The driver owns every registered character and advances the two
//! cadences: per-frame regeneration and the fixed-period work (ability
//! cooldowns, scheduled effects).

pub mod driver;
pub mod effect;

pub use driver::{DeathObserver, SimulationDriver};
pub use effect::ScheduledEffect;
