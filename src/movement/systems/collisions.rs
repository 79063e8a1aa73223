//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::kinematics::apply_ground_contact;
use crate::movement::{GameLayer, Landed, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut landed: MessageWriter<Landed>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &Collider,
            &LinearVelocity,
            &mut MovementState,
        ),
        With<Player>,
    >,
) {
    // Floors and hookable blocks can both be stood on
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Anchor]);

    for (entity, transform, collider, velocity, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_ray_length,
            true,
            &ground_filter,
        );

        if apply_ground_contact(&mut state, hit.is_some(), velocity.y, &tuning) {
            landed.write(Landed { entity });
            debug!(
                "Landed: air_jumps_remaining={}",
                state.air_jumps_remaining
            );
        } else if !state.on_ground && was_on_ground {
            debug!(
                "Left ground: air_jumps_remaining={}",
                state.air_jumps_remaining
            );
        }
    }
}
