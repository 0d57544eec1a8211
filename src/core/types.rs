//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for characters registered with the simulation driver.
///
/// Cross-character operations (damage, scheduled regeneration) address their
/// target by id and resolve it through the driver's registry; nothing holds a
/// direct reference into another character's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulation tick counter
pub type Tick = u64;

/// Seconds elapsed since the previous tick
pub type DeltaTime = f32;
