//! Load ability catalog content from TOML files

use std::path::Path;

use serde::Deserialize;

use crate::ability::{AbilityCatalog, AbilityDefinition, DamageKind, ValueRange};
use crate::core::error::{CoreError, Result};

#[derive(Debug, Deserialize)]
struct AbilityFile {
    #[serde(default)]
    ability: Vec<RawAbility>,
}

/// Raw file schema; kind strings resolve through the fallible selector
/// parsers, so a typo surfaces as `InvalidSelector` rather than content
/// silently mapping to the wrong ability.
#[derive(Debug, Deserialize)]
struct RawAbility {
    title: String,
    description: String,
    kind: String,
    effect: String,
    #[serde(default)]
    damage: Option<String>,
    power: [f32; 2],
    duration: [f32; 2],
    cooldown: [f32; 2],
    cost_kind: String,
    cost: [f32; 2],
    #[serde(default)]
    range: f32,
    #[serde(default)]
    radius: f32,
}

pub fn parse_ability_catalog(content: &str) -> Result<AbilityCatalog> {
    let file: AbilityFile = toml::from_str(content)?;
    if file.ability.is_empty() {
        return Err(CoreError::InvalidContent(
            "no [[ability]] entries found".to_string(),
        ));
    }

    let mut definitions = Vec::with_capacity(file.ability.len());
    for raw in file.ability {
        definitions.push(AbilityDefinition {
            kind: raw.kind.parse()?,
            effect: raw.effect.parse()?,
            damage: raw
                .damage
                .as_deref()
                .map(str::parse)
                .transpose()?
                .unwrap_or(DamageKind::None),
            cost_kind: raw.cost_kind.parse()?,
            title: raw.title,
            description: raw.description,
            power_range: ValueRange::new(raw.power[0], raw.power[1]),
            duration_range: ValueRange::new(raw.duration[0], raw.duration[1]),
            cooldown_range: ValueRange::new(raw.cooldown[0], raw.cooldown[1]),
            cost_range: ValueRange::new(raw.cost[0], raw.cost[1]),
            range: raw.range,
            radius: raw.radius,
        });
    }

    AbilityCatalog::new(definitions)
}

pub fn load_ability_catalog(path: &Path) -> Result<AbilityCatalog> {
    let content = std::fs::read_to_string(path)?;
    parse_ability_catalog(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_CONTENT: &str = include_str!("../../data/abilities.toml");

    #[test]
    fn test_reference_file_matches_builtin_defaults() {
        let loaded = parse_ability_catalog(REFERENCE_CONTENT).unwrap();
        assert_eq!(loaded, AbilityCatalog::with_defaults());
    }

    #[test]
    fn test_unknown_kind_is_invalid_selector() {
        let content = r#"
            [[ability]]
            title = "Fireball"
            description = "Not in this catalog."
            kind = "fireball"
            effect = "damage"
            damage = "energy"
            power = [1.0, 2.0]
            duration = [0.0, 0.0]
            cooldown = [1.0, 2.0]
            cost_kind = "energy"
            cost = [1.0, 2.0]
        "#;
        assert!(matches!(
            parse_ability_catalog(content),
            Err(CoreError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(
            parse_ability_catalog(""),
            Err(CoreError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        assert!(matches!(
            parse_ability_catalog("[[ability]\nbroken"),
            Err(CoreError::TomlError(_))
        ));
    }

    #[test]
    fn test_omitted_damage_defaults_to_none() {
        let content = r#"
            [[ability]]
            title = "Plasma Shield"
            description = "Defensive."
            kind = "plasma_shield"
            effect = "defense"
            power = [0.0, 0.0]
            duration = [5.0, 10.0]
            cooldown = [10.0, 15.0]
            cost_kind = "energy"
            cost = [15.0, 25.0]
        "#;
        let catalog = parse_ability_catalog(content).unwrap();
        let definition = catalog
            .definition(crate::ability::AbilityKind::PlasmaShield)
            .unwrap();
        assert_eq!(definition.damage, DamageKind::None);
        assert_eq!(definition.range, 0.0);
    }
}
