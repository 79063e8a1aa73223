//! Grapple domain: hook casting, travel, swing and rope systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::grapple::physics::{
    aim_direction, apply_rope_constraint, hook_arrived, hook_travel_step, hook_travel_time,
    initial_rope_length, reel_rope, release_velocity, swing_velocity_step,
};
use crate::grapple::{
    Grapple, GrappleAttached, GrappleFired, GrapplePhase, GrappleReleased, GrappleTuning,
    HookVisual,
};
use crate::levels::LevelEntity;
use crate::movement::{GameLayer, MovementInput, MovementState, Player, PointerInput};

const ROPE_COLOR: Color = Color::srgb(0.85, 0.8, 0.65);
const HOOK_COLOR: Color = Color::srgb(0.7, 0.7, 0.75);
/// Slack allowed when confirming line of sight to the hit point
const LINE_OF_SIGHT_SLACK: f32 = 1.0;

fn hookable_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall, GameLayer::Anchor])
}

/// Decide where a shot from `body` toward `aim` bites.
///
/// `cast` reports the first hookable surface along a ray as its entity and
/// distance. The hook flies from the hook origin, and the body must see the
/// same surface at the hit point or the shot is rejected.
pub(crate) fn plan_shot(
    body: Vec2,
    aim: Vec2,
    tuning: &GrappleTuning,
    mut cast: impl FnMut(Vec2, Dir2, f32) -> Option<(Entity, f32)>,
) -> Option<GrapplePhase> {
    let origin = body + tuning.hook_offset();
    let direction = Dir2::new(aim_direction(origin, aim)?).ok()?;

    let Some((hit_entity, distance)) = cast(origin, direction, tuning.max_distance) else {
        debug!("Grapple missed");
        return None;
    };
    let hit_point = origin + *direction * distance;

    let to_hit = hit_point - body;
    if let Ok(los_direction) = Dir2::new(to_hit)
        && let Some((blocker, _)) =
            cast(body, los_direction, to_hit.length() + LINE_OF_SIGHT_SLACK)
        && blocker != hit_entity
    {
        debug!("Grapple blocked: no line of sight to hit point");
        return None;
    }

    Some(GrapplePhase::Traveling {
        hook_position: origin,
        target: hit_point,
        travel_time: hook_travel_time(distance, tuning),
    })
}

pub(crate) fn fire_grapple(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    pointer: Res<PointerInput>,
    tuning: Res<GrappleTuning>,
    mut fired: MessageWriter<GrappleFired>,
    mut query: Query<(Entity, &Transform, &mut Grapple), With<Player>>,
) {
    if !pointer.grapple_pressed {
        return;
    }

    let Some(aim) = pointer.aim_world else {
        debug!("Grapple pressed without a cursor position");
        return;
    };

    let filter = hookable_filter();
    let cast = |origin: Vec2, direction: Dir2, max_distance: f32| {
        spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| (hit.entity, hit.distance))
    };

    for (entity, transform, mut grapple) in &mut query {
        if !grapple.phase.is_idle() {
            continue;
        }

        let body = transform.translation.truncate();
        let Some(phase) = plan_shot(body, aim, &tuning, cast) else {
            continue;
        };
        let GrapplePhase::Traveling {
            hook_position,
            target,
            ..
        } = phase
        else {
            continue;
        };
        grapple.phase = phase;

        let visual = commands
            .spawn((
                HookVisual,
                LevelEntity,
                Sprite {
                    color: HOOK_COLOR,
                    custom_size: Some(Vec2::splat(tuning.hook_size)),
                    ..default()
                },
                Transform::from_xyz(hook_position.x, hook_position.y, 2.0),
            ))
            .id();
        grapple.hook_visual = Some(visual);

        fired.write(GrappleFired { entity });
        debug!(
            "Grapple fired at ({:.0}, {:.0}), distance {:.0}",
            target.x,
            target.y,
            hook_position.distance(target)
        );
    }
}

pub(crate) fn release_grapple(
    mut commands: Commands,
    pointer: Res<PointerInput>,
    tuning: Res<GrappleTuning>,
    mut released: MessageWriter<GrappleReleased>,
    mut query: Query<
        (
            Entity,
            &mut Grapple,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if pointer.grapple_held {
        return;
    }

    for (entity, mut grapple, mut state, mut velocity) in &mut query {
        if grapple.phase.is_idle() {
            continue;
        }

        if let Some(visual) = grapple.hook_visual.take() {
            commands.entity(visual).despawn();
        }

        let was_attached = grapple.phase.is_attached();
        velocity.0 = release_velocity(velocity.0, was_attached, &tuning);
        grapple.phase = GrapplePhase::Idle;
        state.grappling = false;

        released.write(GrappleReleased {
            entity,
            velocity: velocity.0,
        });
        debug!(
            "Grapple released with velocity ({:.0}, {:.0})",
            velocity.x, velocity.y
        );
    }
}

pub(crate) fn advance_hook(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<GrappleTuning>,
    mut attached: MessageWriter<GrappleAttached>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut Grapple,
            &mut MovementState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut visuals: Query<&mut Transform, (With<HookVisual>, Without<Player>)>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut grapple, mut state, mut velocity) in &mut query {
        let GrapplePhase::Traveling {
            hook_position,
            target,
            travel_time,
        } = grapple.phase
        else {
            continue;
        };

        let hook_position = hook_travel_step(hook_position, target, dt, travel_time);

        if let Some(visual) = grapple.hook_visual
            && let Ok(mut visual_transform) = visuals.get_mut(visual)
        {
            visual_transform.translation.x = hook_position.x;
            visual_transform.translation.y = hook_position.y;
        }

        if !hook_arrived(hook_position, target, &tuning) {
            grapple.phase = GrapplePhase::Traveling {
                hook_position,
                target,
                travel_time,
            };
            continue;
        }

        let rope_length = initial_rope_length(transform.translation.truncate(), target, &tuning);
        grapple.phase = GrapplePhase::Attached {
            anchor: target,
            rope_length,
        };
        state.grappling = true;
        velocity.0 = Vec2::ZERO;

        if let Some(visual) = grapple.hook_visual.take() {
            commands.entity(visual).despawn();
        }

        attached.write(GrappleAttached {
            entity,
            anchor: target,
        });
        debug!("Grapple attached, rope length {:.0}", rope_length);
    }
}

pub(crate) fn apply_swing(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<GrappleTuning>,
    mut query: Query<(&Transform, &mut Grapple, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (transform, mut grapple, mut velocity) in &mut query {
        let GrapplePhase::Attached {
            anchor,
            rope_length,
        } = grapple.phase
        else {
            continue;
        };

        let position = transform.translation.truncate();
        velocity.0 = swing_velocity_step(position, velocity.0, anchor, input.axis, &tuning, dt);

        grapple.phase = GrapplePhase::Attached {
            anchor,
            rope_length: reel_rope(rope_length, input.axis.y, &tuning, dt),
        };
    }
}

pub(crate) fn enforce_rope(
    mut query: Query<(&Grapple, &mut Position, &mut LinearVelocity), With<Player>>,
) {
    for (grapple, mut position, mut velocity) in &mut query {
        let GrapplePhase::Attached {
            anchor,
            rope_length,
        } = grapple.phase
        else {
            continue;
        };

        let (constrained, constrained_velocity) =
            apply_rope_constraint(position.0, velocity.0, anchor, rope_length);
        if constrained != position.0 {
            position.0 = constrained;
        }
        velocity.0 = constrained_velocity;
    }
}

/// Line from the hook origin to the hook or anchor while a rope is out.
pub(crate) fn draw_rope(
    mut gizmos: Gizmos,
    tuning: Res<GrappleTuning>,
    query: Query<(&Transform, &Grapple), With<Player>>,
) {
    for (transform, grapple) in &query {
        let Some(end) = grapple.phase.rope_end() else {
            continue;
        };
        let origin = transform.translation.truncate() + tuning.hook_offset();
        gizmos.line_2d(origin, end, ROPE_COLOR);
    }
}
