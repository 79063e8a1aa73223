//! Combat domain: patrol / chase behaviour for walking enemies.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{Dying, Enemy, GroundEnemyAi};
use crate::combat::events::PlayerDied;
use crate::movement::{GameLayer, Player};

/// What the enemy's sensors report for the direction it wants to walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySensors {
    pub ground_ahead: bool,
    pub wall_ahead: bool,
}

impl EnemySensors {
    pub fn blocked(&self) -> bool {
        !self.ground_ahead || self.wall_ahead
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiDecision {
    pub velocity_x: f32,
    pub facing_right: bool,
    pub chasing: bool,
}

/// One tick of the ground enemy brain.
///
/// `sense` is asked for the sensor readings along the intended walking
/// direction (+1 or -1). Chasing enemies stop at edges and walls, patrolling
/// ones turn around.
pub fn enemy_ai_step(
    ai: &GroundEnemyAi,
    enemy_pos: Vec2,
    player_pos: Option<Vec2>,
    sense: impl FnOnce(f32) -> EnemySensors,
) -> AiDecision {
    if !ai.player_alive {
        return AiDecision {
            velocity_x: 0.0,
            facing_right: ai.facing_right,
            chasing: false,
        };
    }

    let target = player_pos.filter(|p| p.distance(enemy_pos) <= ai.detection_radius);
    let chasing = target.is_some();
    let mut facing_right = ai.facing_right;

    let mut direction = match target {
        Some(p) if p.x > enemy_pos.x => 1.0,
        Some(_) => -1.0,
        None => ai.facing_sign(),
    };

    if sense(direction).blocked() {
        if chasing {
            direction = 0.0;
        } else {
            facing_right = !facing_right;
            direction = if facing_right { 1.0 } else { -1.0 };
        }
    }

    if direction > 0.0 {
        facing_right = true;
    } else if direction < 0.0 {
        facing_right = false;
    }

    let speed = if chasing { ai.chase_speed } else { ai.patrol_speed };

    AiDecision {
        velocity_x: direction * speed,
        facing_right,
        chasing,
    }
}

pub(crate) fn update_ground_enemies(
    spatial_query: SpatialQuery,
    player_query: Query<&Transform, (With<Player>, Without<Dying>)>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &mut GroundEnemyAi,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        (With<Enemy>, Without<Dying>, Without<Player>),
    >,
) {
    let player_pos = player_query
        .iter()
        .next()
        .map(|transform| transform.translation.truncate());
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (entity, transform, mut ai, mut velocity, mut sprite) in &mut enemy_query {
        let position = transform.translation.truncate();

        let decision = enemy_ai_step(&ai, position, player_pos, |direction| {
            let sensor = Collider::circle(ai.ground_sensor_radius);
            let ground_ahead = !spatial_query
                .shape_intersections(
                    &sensor,
                    ai.ground_sensor_position(position, direction),
                    0.0,
                    &filter,
                )
                .is_empty();
            let wall_ahead = Dir2::new(Vec2::new(direction, 0.0))
                .ok()
                .and_then(|dir| {
                    spatial_query.cast_ray(position, dir, ai.wall_sensor_distance, true, &filter)
                })
                .is_some();
            EnemySensors {
                ground_ahead,
                wall_ahead,
            }
        });

        if decision.chasing != ai.chasing {
            debug!(
                "Enemy {:?} {}",
                entity,
                if decision.chasing {
                    "started chasing"
                } else {
                    "lost the player"
                }
            );
        }

        ai.chasing = decision.chasing;
        ai.facing_right = decision.facing_right;
        velocity.x = decision.velocity_x;
        sprite.flip_x = !decision.facing_right;
    }
}

/// Every enemy stands down once the player is dead.
pub(crate) fn stand_down_on_player_death(
    mut player_died: MessageReader<PlayerDied>,
    mut query: Query<(&mut GroundEnemyAi, &mut LinearVelocity), With<Enemy>>,
) {
    if player_died.is_empty() {
        return;
    }
    player_died.clear();

    for (mut ai, mut velocity) in &mut query {
        ai.player_alive = false;
        ai.chasing = false;
        velocity.x = 0.0;
    }
    debug!("Enemies standing down after player death");
}
