//! Movement tuning passthrough
//!
//! Pure configuration reads consumed by the locomotion layer; no core
//! logic depends on these values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementSettings {
    pub walk_speed: f32,
    pub default_speed: f32,
    pub max_speed: f32,
    pub sprint_enabled: bool,
    pub jump_enabled: bool,
    pub double_jump_enabled: bool,
    pub max_jump_count: u32,
    pub jump_height: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: 150.0,
            default_speed: 300.0,
            max_speed: 600.0,
            sprint_enabled: true,
            jump_enabled: true,
            double_jump_enabled: false,
            max_jump_count: 1,
            jump_height: 420.0,
        }
    }
}
