//! Content domain: tests for RON parsing, defaults and level validation.

use super::loader::{parse_levels, parse_tuning};
use super::validation::validate_levels;
use super::{LevelRegistry, PickupKind, TriggerAction, builtin_levels};
use crate::grapple::GrappleTuning;
use crate::movement::MovementTuning;

const LEVELS: &str = r#"
(
    schema_version: 1,
    items: [
        (
            id: "a",
            name: "First",
            player_spawn: (0.0, 0.0),
            ground: [(x: 0.0, y: -100.0, width: 400.0, height: 40.0)],
            enemies: [(x: 100.0, y: -60.0)],
            pickups: [(x: 50.0, y: -50.0, kind: DoubleJump)],
            triggers: [(area: (x: 180.0, y: -60.0, width: 40.0, height: 80.0), action: LoadLevel("b"))],
        ),
        (
            id: "b",
            name: "Second",
            player_spawn: (0.0, 0.0),
            triggers: [(area: (x: 180.0, y: -60.0, width: 40.0, height: 80.0), action: EndGame)],
        ),
    ],
)
"#;

#[test]
fn test_partial_tuning_keeps_defaults() {
    let tuning = parse_tuning("(movement: (max_speed: 400.0), grapple: (boost_on_release: false))")
        .unwrap();

    assert_eq!(tuning.movement.max_speed, 400.0);
    assert_eq!(
        tuning.movement.jump_velocity,
        MovementTuning::default().jump_velocity
    );
    assert!(!tuning.grapple.boost_on_release);
    assert_eq!(
        tuning.grapple.max_distance,
        GrappleTuning::default().max_distance
    );
}

#[test]
fn test_empty_tuning_is_all_defaults() {
    let tuning = parse_tuning("()").unwrap();
    assert_eq!(tuning.dash.duration, super::TuningFile::default().dash.duration);
}

#[test]
fn test_malformed_tuning_reports_file() {
    let err = parse_tuning("(movement: (max_speed: \"fast\"))").unwrap_err();
    assert_eq!(err.file, "tuning.ron");
    assert!(err.to_string().starts_with("Failed to load tuning.ron"));
}

#[test]
fn test_levels_parse_with_field_defaults() {
    let levels = parse_levels(LEVELS).unwrap();
    assert_eq!(levels.len(), 2);

    let first = &levels[0];
    assert!(first.enemies[0].facing_right);
    assert_eq!(first.enemies[0].max_health, None);
    assert_eq!(first.pickups[0].kind, PickupKind::DoubleJump);
    assert_eq!(first.pickups[0].label, "Extra Jump");
    assert_eq!(
        first.triggers[0].action,
        TriggerAction::LoadLevel("b".to_string())
    );
    assert!(levels[1].ground.is_empty());
}

#[test]
fn test_empty_level_list_is_rejected() {
    assert!(parse_levels("(schema_version: 1, items: [])").is_err());
}

#[test]
fn test_registry_keeps_file_order_and_first_duplicate() {
    let mut levels = parse_levels(LEVELS).unwrap();
    let mut duplicate = levels[1].clone();
    duplicate.id = "a".to_string();
    duplicate.name = "Impostor".to_string();
    levels.push(duplicate);

    let registry = LevelRegistry::from_levels(levels);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.first_level_id(), Some("a"));
    assert_eq!(registry.get("a").unwrap().name, "First");
}

#[test]
fn test_validation_flags_missing_level_target() {
    let mut levels = parse_levels(LEVELS).unwrap();
    levels.retain(|level| level.id == "a");

    let errors = validate_levels(&LevelRegistry::from_levels(levels));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "triggers");
    assert!(errors[0].problem.contains("'b'"));
}

#[test]
fn test_validation_flags_bad_geometry_and_health() {
    let mut levels = parse_levels(LEVELS).unwrap();
    levels[0].ground[0].width = 0.0;
    levels[0].enemies[0].max_health = Some(-5.0);

    let errors = validate_levels(&LevelRegistry::from_levels(levels));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_builtin_levels_are_valid() {
    let registry = LevelRegistry::from_levels(builtin_levels());
    assert!(validate_levels(&registry).is_empty());
    assert_eq!(registry.first_level_id(), Some("level_1"));
}

#[test]
fn test_shipped_data_files_parse_and_validate() {
    let tuning = parse_tuning(include_str!("../../assets/data/tuning.ron")).unwrap();
    assert_eq!(tuning.combat.iframes_duration, 0.5);

    let levels = parse_levels(include_str!("../../assets/data/levels.ron")).unwrap();
    let builtin = builtin_levels();
    assert_eq!(levels.len(), builtin.len());
    assert_eq!(levels[1].enemies[1].max_health, Some(150.0));

    let registry = LevelRegistry::from_levels(levels);
    assert!(validate_levels(&registry).is_empty());
}
