//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{ContactDamage, Enemy, GroundEnemyAi, Health, Invulnerable};
use crate::combat::resources::EnemyTuning;
use crate::movement::GameLayer;

pub(crate) const ENEMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);

/// Bundle for spawning a walking enemy from the shared tuning
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub name: Name,
    pub health: Health,
    pub invulnerable: Invulnerable,
    pub contact_damage: ContactDamage,
    pub ai: GroundEnemyAi,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
    pub friction: Friction,
}

impl EnemyBundle {
    pub fn new(
        name: impl Into<String>,
        position: Vec2,
        facing_right: bool,
        max_health: Option<f32>,
        tuning: &EnemyTuning,
    ) -> Self {
        let size = tuning.size();

        Self {
            enemy: Enemy,
            name: Name::new(name.into()),
            health: Health::new(max_health.unwrap_or(tuning.max_health)),
            invulnerable: Invulnerable::default(),
            contact_damage: ContactDamage {
                amount: tuning.contact_damage,
            },
            ai: GroundEnemyAi {
                patrol_speed: tuning.patrol_speed,
                chase_speed: tuning.chase_speed,
                detection_radius: tuning.detection_radius,
                ground_sensor_offset: tuning.ground_sensor_offset(),
                ground_sensor_radius: tuning.ground_sensor_radius,
                wall_sensor_distance: tuning.wall_sensor_distance,
                facing_right,
                chasing: false,
                player_alive: true,
            },
            sprite: Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(size),
                flip_x: !facing_right,
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Player],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(1.0),
            friction: Friction::new(0.0),
        }
    }
}
