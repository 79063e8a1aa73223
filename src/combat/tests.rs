//! Combat domain: tests for health, dash bookkeeping, enemy decisions and damage flow.

use std::time::Duration;

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::ai::{EnemySensors, enemy_ai_step};
use super::ai::ground::stand_down_on_player_death;
use super::dash::{dash_strikes, reset_dash_readiness, update_dash};
use super::systems::apply_damage;
use super::{
    CombatTuning, DamageEvent, DashState, DashTuning, DeathEvent, Enemy, EnemyBundle, EnemyTuning,
    GroundEnemyAi, Health, Invulnerable, PlayerDied, dash_direction,
};
use crate::camera::ShakeRequest;
use crate::grapple::GrappleFired;
use crate::movement::{Facing, Landed, MovementState, Player};

fn ai() -> GroundEnemyAi {
    EnemyBundle::new("enemy", Vec2::ZERO, true, None, &EnemyTuning::default()).ai
}

const CLEAR: EnemySensors = EnemySensors {
    ground_ahead: true,
    wall_ahead: false,
};
const EDGE: EnemySensors = EnemySensors {
    ground_ahead: false,
    wall_ahead: false,
};
const WALL: EnemySensors = EnemySensors {
    ground_ahead: true,
    wall_ahead: true,
};

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_damage_is_clamped_to_remaining_health() {
    let mut health = Health::new(100.0);
    assert_eq!(health.take_damage(30.0), 30.0);
    assert_eq!(health.current, 70.0);
    assert_eq!(health.take_damage(500.0), 70.0);
    assert!(health.is_dead());
    assert_eq!(health.percent(), 0.0);
}

#[test]
fn test_heal_never_exceeds_max() {
    let mut health = Health::new(100.0);
    health.take_damage(20.0);
    assert_eq!(health.heal(50.0), 20.0);
    assert_eq!(health.current, 100.0);
    assert_eq!(health.percent(), 1.0);
}

// -----------------------------------------------------------------------------
// Dash
// -----------------------------------------------------------------------------

#[test]
fn test_dash_hits_each_enemy_once() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();

    let mut dash = DashState::default();
    assert!(dash.ready);
    dash.start(Vec2::X, 0.15);
    assert!(!dash.ready);
    assert!(dash.is_active());

    assert!(dash.register_hit(a));
    assert!(!dash.register_hit(a));
    assert!(dash.register_hit(b));

    dash.start(Vec2::Y, 0.15);
    assert!(dash.register_hit(a), "a new dash starts with a clean hit list");
}

#[test]
fn test_dash_strikes_each_overlapping_enemy_once() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();
    let wall = world.spawn_empty().id();
    let is_enemy = |e: Entity| e != wall;

    let mut dash = DashState::default();
    dash.start(Vec2::X, 0.15);

    assert_eq!(dash_strikes(&mut dash, [a, wall], is_enemy), vec![a]);
    assert_eq!(dash_strikes(&mut dash, [a, b], is_enemy), vec![b]);
    assert!(dash_strikes(&mut dash, [a, b, wall], is_enemy).is_empty());
}

fn dash_world(dash: DashState) -> (World, Entity) {
    let mut world = World::new();
    world.init_resource::<DashTuning>();
    world.init_resource::<Time>();
    let player = world
        .spawn((
            Player,
            dash,
            MovementState {
                dashing: true,
                ..default()
            },
            LinearVelocity::default(),
        ))
        .id();
    (world, player)
}

fn advance(world: &mut World, seconds: f32) {
    world
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
}

#[test]
fn test_active_dash_drives_velocity() {
    let tuning = DashTuning::default();
    let mut dash = DashState::default();
    dash.start(Vec2::NEG_Y, tuning.duration);
    let (mut world, player) = dash_world(dash);

    advance(&mut world, tuning.duration * 0.25);
    world.run_system_once(update_dash).unwrap();

    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec2::NEG_Y * tuning.speed
    );
    assert!(world.get::<MovementState>(player).unwrap().dashing);
    assert!(world.get::<DashState>(player).unwrap().is_active());
}

#[test]
fn test_finished_dash_stops_player_and_returns_control() {
    let tuning = DashTuning::default();
    let mut dash = DashState::default();
    dash.start(Vec2::X, tuning.duration);
    let (mut world, player) = dash_world(dash);

    advance(&mut world, tuning.duration + 0.01);
    world.run_system_once(update_dash).unwrap();

    let dash = world.get::<DashState>(player).unwrap();
    assert!(!dash.is_active());
    assert_eq!(dash.remaining, 0.0);
    assert!(!dash.ready, "readiness waits for a landing or a grapple");
    assert!(!world.get::<MovementState>(player).unwrap().dashing);
    assert_eq!(world.get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);
}

fn spent_dash() -> DashState {
    DashState {
        ready: false,
        ..default()
    }
}

#[test]
fn test_landing_makes_dash_ready() {
    let mut world = World::new();
    world.init_resource::<Messages<Landed>>();
    world.init_resource::<Messages<GrappleFired>>();
    let player = world.spawn((Player, spent_dash())).id();
    let other = world.spawn((Player, spent_dash())).id();

    world.write_message(Landed { entity: player });
    world.run_system_once(reset_dash_readiness).unwrap();

    assert!(world.get::<DashState>(player).unwrap().ready);
    assert!(!world.get::<DashState>(other).unwrap().ready);
}

#[test]
fn test_firing_grapple_makes_dash_ready() {
    let mut world = World::new();
    world.init_resource::<Messages<Landed>>();
    world.init_resource::<Messages<GrappleFired>>();
    let player = world.spawn((Player, spent_dash())).id();

    world.run_system_once(reset_dash_readiness).unwrap();
    assert!(!world.get::<DashState>(player).unwrap().ready);

    world.write_message(GrappleFired { entity: player });
    world.run_system_once(reset_dash_readiness).unwrap();
    assert!(world.get::<DashState>(player).unwrap().ready);
}

#[test]
fn test_dash_aims_at_cursor_or_falls_back_to_facing() {
    let dir = dash_direction(Vec2::ZERO, Some(Vec2::new(0.0, -10.0)), Facing::Right);
    assert!((dir - Vec2::NEG_Y).length() < 1e-6);

    assert_eq!(dash_direction(Vec2::ZERO, None, Facing::Left), Vec2::NEG_X);
    assert_eq!(
        dash_direction(Vec2::ONE, Some(Vec2::ONE), Facing::Right),
        Vec2::X
    );
}

// -----------------------------------------------------------------------------
// Ground enemy decisions
// -----------------------------------------------------------------------------

#[test]
fn test_patrols_in_facing_direction_when_player_far() {
    let ai = ai();
    let far = Some(Vec2::new(ai.detection_radius * 3.0, 0.0));
    let decision = enemy_ai_step(&ai, Vec2::ZERO, far, |_| CLEAR);
    assert!(!decision.chasing);
    assert_eq!(decision.velocity_x, ai.patrol_speed);
    assert!(decision.facing_right);
}

#[test]
fn test_patrol_turns_around_at_edge_and_wall() {
    let ai = ai();
    for sensors in [EDGE, WALL] {
        let decision = enemy_ai_step(&ai, Vec2::ZERO, None, |_| sensors);
        assert!(!decision.facing_right);
        assert_eq!(decision.velocity_x, -ai.patrol_speed);
    }
}

#[test]
fn test_chases_player_within_radius() {
    let ai = ai();
    let near = Some(Vec2::new(-ai.detection_radius * 0.5, 0.0));
    let mut sampled = None;
    let decision = enemy_ai_step(&ai, Vec2::ZERO, near, |dir| {
        sampled = Some(dir);
        CLEAR
    });
    assert!(decision.chasing);
    assert_eq!(sampled, Some(-1.0), "sensors sampled toward the player");
    assert_eq!(decision.velocity_x, -ai.chase_speed);
    assert!(!decision.facing_right);
}

#[test]
fn test_chase_stops_at_edge_without_turning() {
    let ai = ai();
    let near = Some(Vec2::new(ai.detection_radius * 0.5, 0.0));
    let decision = enemy_ai_step(&ai, Vec2::ZERO, near, |_| EDGE);
    assert!(decision.chasing);
    assert_eq!(decision.velocity_x, 0.0);
    assert!(decision.facing_right);
}

#[test]
fn test_dead_player_means_standing_still() {
    let mut ai = ai();
    ai.player_alive = false;
    let near = Some(Vec2::new(10.0, 0.0));
    let decision = enemy_ai_step(&ai, Vec2::ZERO, near, |_| CLEAR);
    assert!(!decision.chasing);
    assert_eq!(decision.velocity_x, 0.0);
}

#[test]
fn test_ground_sensor_mirrors_with_direction() {
    let ai = ai();
    let right = ai.ground_sensor_position(Vec2::ZERO, 1.0);
    let left = ai.ground_sensor_position(Vec2::ZERO, -1.0);
    assert_eq!(right.x, -left.x);
    assert_eq!(right.y, left.y);
    assert!(right.y < 0.0);
}

// -----------------------------------------------------------------------------
// Damage flow
// -----------------------------------------------------------------------------

fn damage_world() -> World {
    let mut world = World::new();
    world.init_resource::<CombatTuning>();
    world.init_resource::<Messages<DamageEvent>>();
    world.init_resource::<Messages<DeathEvent>>();
    world.init_resource::<Messages<ShakeRequest>>();
    world
}

#[test]
fn test_player_hit_grants_iframes_and_shakes_camera() {
    let mut world = damage_world();
    let enemy = world.spawn(Enemy).id();
    let player = world
        .spawn((Player, Health::new(100.0), Invulnerable::default()))
        .id();

    for _ in 0..2 {
        world.write_message(DamageEvent {
            source: enemy,
            target: player,
            amount: 20.0,
        });
    }
    world.run_system_once(apply_damage).unwrap();

    // Second hit in the same frame lands inside the i-frame window
    assert_eq!(world.get::<Health>(player).unwrap().current, 80.0);
    assert!(world.get::<Invulnerable>(player).unwrap().is_invulnerable());
    assert_eq!(world.resource::<Messages<ShakeRequest>>().len(), 1);
    assert!(world.resource::<Messages<DeathEvent>>().is_empty());
}

#[test]
fn test_lethal_hit_reports_death_once() {
    let mut world = damage_world();
    let player = world.spawn(Player).id();
    let enemy = world.spawn((Enemy, Health::new(50.0))).id();

    for _ in 0..3 {
        world.write_message(DamageEvent {
            source: player,
            target: enemy,
            amount: 50.0,
        });
    }
    world.run_system_once(apply_damage).unwrap();

    assert!(world.get::<Health>(enemy).unwrap().is_dead());
    assert_eq!(world.resource::<Messages<DeathEvent>>().len(), 1);
    assert!(world.resource::<Messages<ShakeRequest>>().is_empty());
}

#[test]
fn test_enemies_stand_down_when_player_dies() {
    let mut world = World::new();
    world.init_resource::<Messages<PlayerDied>>();
    let enemy = world
        .spawn((Enemy, ai(), LinearVelocity(Vec2::new(80.0, -30.0))))
        .id();

    world.write_message(PlayerDied);
    world.run_system_once(stand_down_on_player_death).unwrap();

    let ai = world.get::<GroundEnemyAi>(enemy).unwrap();
    assert!(!ai.player_alive);
    assert!(!ai.chasing);
    let velocity = world.get::<LinearVelocity>(enemy).unwrap();
    assert_eq!(velocity.x, 0.0);
    assert_eq!(velocity.y, -30.0, "vertical motion is left to gravity");
}
