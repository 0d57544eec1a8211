//! Lifecycle state and role enums

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Externally driven lifecycle state machine.
///
/// Transitions are unconditional overwrites; only `Death` carries built-in
/// side effects (role-dependent observer routing by the driver).
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    #[default]
    #[display(fmt = "Idle")]
    Idle,
    #[display(fmt = "Attacking")]
    Attacking,
    #[display(fmt = "Defending")]
    Defending,
    #[display(fmt = "Death")]
    Death,
    #[display(fmt = "Stunned")]
    Stunned,
    #[display(fmt = "Charging")]
    Charging,
}

/// Who controls the character. Unset pre-initialization is `Option<Role>`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[display(fmt = "Player")]
    Player,
    #[display(fmt = "AI")]
    Ai,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(LifecycleState::default(), LifecycleState::Idle);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Player.to_string(), "Player");
        assert_eq!(Role::Ai.to_string(), "AI");
    }
}
