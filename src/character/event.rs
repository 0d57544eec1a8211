//! Change notifications emitted by character mutation
//!
//! Every successful state change queues exactly one event, in causal
//! mutation order. The simulation driver drains the queue once per tick
//! and hands events to external consumers (UI, AI, death handling).

use serde::{Deserialize, Serialize};

use crate::ability::AbilityKind;
use crate::attribute::{AttributeKind, AttributeValues};
use crate::character::lifecycle::{LifecycleState, Role};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CharacterEvent {
    LifecycleChanged {
        state: LifecycleState,
    },
    RoleChanged {
        role: Role,
    },
    TitleChanged {
        title: String,
    },
    DescriptionChanged {
        description: String,
    },
    /// One of the nine attributes changed; payload is the full snapshot.
    AttributeChanged {
        kind: AttributeKind,
        values: AttributeValues,
    },
    AbilityExecuted {
        kind: AbilityKind,
    },
    ExperienceChanged {
        experience: f32,
        level: i32,
    },
    LevelChanged {
        level: i32,
    },
    UpgradePointsChanged {
        available: u32,
    },
    /// Queued on entering `Death`, after the `LifecycleChanged` event.
    /// `role` is `None` when death was entered with an unset role.
    Died {
        role: Option<Role>,
    },
}
