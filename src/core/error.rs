use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Entity not found: {0:?}")]
    UnknownEntity(crate::core::types::EntityId),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Ability not present in catalog: {0}")]
    UnknownAbility(crate::ability::AbilityKind),

    #[error("Ability on cooldown: {0}")]
    AbilityOnCooldown(crate::ability::AbilityKind),

    #[error("Death entered with unset role")]
    InvalidRoleTransition,

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
