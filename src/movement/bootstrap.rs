//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{CombatTuning, DashState, Health, Invulnerable};
use crate::grapple::Grapple;
use crate::movement::{GameLayer, MovementState, Player};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
pub(crate) const PLAYER_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);

/// Spawn the player at `position` with full health and no unlocks.
pub fn spawn_player(commands: &mut Commands, position: Vec2, combat: &CombatTuning) -> Entity {
    info!(
        "Spawning player at ({:.0}, {:.0}), health={}",
        position.x, position.y, combat.player_max_health
    );

    commands
        .spawn((
            // Identity & Movement
            (Player, MovementState::spawned(), Grapple::default()),
            // Combat
            (
                Health::new(combat.player_max_health),
                Invulnerable::default(),
                DashState::default(),
            ),
            // Rendering
            Sprite {
                color: PLAYER_COLOR,
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // We handle gravity manually for more control
                Friction::new(0.0),
                SweptCcd::default(),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::Anchor,
                        GameLayer::Enemy,
                        GameLayer::Sensor,
                    ],
                ),
            ),
        ))
        .id()
}
