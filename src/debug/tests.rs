//! Debug domain: tests for toggles, invincibility and sensor geometry.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::DebugState;
use super::systems::{apply_invincibility, wall_sensor_segment};
use crate::combat::{EnemyBundle, EnemyTuning, Health, Invulnerable};
use crate::movement::Player;

#[test]
fn test_toggles_flip_and_report() {
    let mut state = DebugState::default();
    assert!(!state.gizmos_visible);
    assert!(state.toggle_gizmos());
    assert!(!state.toggle_gizmos());
    assert!(state.toggle_invincible());
    assert!(state.toggle_info());
}

#[test]
fn test_wall_sensor_follows_facing() {
    let tuning = EnemyTuning::default();
    let mut ai = EnemyBundle::new("walker", Vec2::ZERO, true, None, &tuning).ai;
    let origin = Vec2::new(10.0, 5.0);

    let (start, end) = wall_sensor_segment(&ai, origin);
    assert_eq!(start, origin);
    assert_eq!(end, origin + Vec2::X * tuning.wall_sensor_distance);

    ai.facing_right = false;
    let (_, end) = wall_sensor_segment(&ai, origin);
    assert_eq!(end, origin - Vec2::X * tuning.wall_sensor_distance);
}

#[test]
fn test_invincibility_refills_health() {
    let mut world = World::new();
    world.insert_resource(DebugState {
        invincible: true,
        ..default()
    });
    let mut health = Health::new(100.0);
    health.take_damage(60.0);
    let player = world
        .spawn((Player, health, Invulnerable::default()))
        .id();

    world.run_system_once(apply_invincibility).unwrap();

    assert_eq!(world.get::<Health>(player).unwrap().current, 100.0);
    assert!(world.get::<Invulnerable>(player).unwrap().is_invulnerable());
}
