//! Combat domain: cursor-aimed dash that damages enemies it passes through.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{DashState, Dying, Enemy};
use crate::combat::events::DamageEvent;
use crate::combat::resources::DashTuning;
use crate::grapple::GrappleFired;
use crate::movement::{Facing, GameLayer, Landed, MovementState, Player, PointerInput};

/// Direction of a dash toward the cursor, falling back to the facing
/// direction when there is no cursor or it sits on the player.
pub fn dash_direction(position: Vec2, aim: Option<Vec2>, facing: Facing) -> Vec2 {
    aim.and_then(|target| (target - position).try_normalize())
        .unwrap_or(Vec2::new(facing.sign(), 0.0))
}

pub(crate) fn start_dash(
    pointer: Res<PointerInput>,
    tuning: Res<DashTuning>,
    mut query: Query<
        (
            &Transform,
            &mut DashState,
            &mut MovementState,
            &mut Sprite,
        ),
        (With<Player>, Without<Dying>),
    >,
) {
    if !pointer.dash_pressed {
        return;
    }

    for (transform, mut dash, mut state, mut sprite) in &mut query {
        if !dash.ready || dash.is_active() || state.grappling {
            continue;
        }

        let position = transform.translation.truncate();
        let direction = dash_direction(position, pointer.aim_world, state.facing);

        if let Some(facing) = Facing::from_direction(direction.x) {
            state.facing = facing;
            sprite.flip_x = facing == Facing::Left;
        }

        dash.start(direction, tuning.duration);
        state.dashing = true;
        debug!("Dash started toward ({:.2}, {:.2})", direction.x, direction.y);
    }
}

/// Enemies among `overlaps` this dash has not struck yet. Each one is
/// recorded on the dash so later frames skip it.
pub(crate) fn dash_strikes(
    dash: &mut DashState,
    overlaps: impl IntoIterator<Item = Entity>,
    is_enemy: impl Fn(Entity) -> bool,
) -> Vec<Entity> {
    overlaps
        .into_iter()
        .filter(|&target| is_enemy(target) && dash.register_hit(target))
        .collect()
}

pub(crate) fn strike_enemies(
    spatial_query: SpatialQuery,
    tuning: Res<DashTuning>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut query: Query<(Entity, &Transform, &mut DashState), With<Player>>,
    enemies: Query<(), (With<Enemy>, Without<Dying>)>,
) {
    let filter = SpatialQueryFilter::from_mask([GameLayer::Enemy]);
    let hit_shape = Collider::circle(tuning.damage_radius);

    for (entity, transform, mut dash) in &mut query {
        if !dash.is_active() {
            continue;
        }

        let position = transform.translation.truncate();
        let overlaps = spatial_query.shape_intersections(&hit_shape, position, 0.0, &filter);
        for target in dash_strikes(&mut dash, overlaps, |e| enemies.contains(e)) {
            damage_events.write(DamageEvent {
                source: entity,
                target,
                amount: tuning.damage,
            });
        }
    }
}

pub(crate) fn update_dash(
    time: Res<Time>,
    tuning: Res<DashTuning>,
    mut query: Query<(&mut DashState, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut dash, mut state, mut velocity) in &mut query {
        if !dash.is_active() {
            continue;
        }

        velocity.0 = dash.direction * tuning.speed;

        dash.remaining -= dt;
        if dash.remaining <= 0.0 {
            dash.remaining = 0.0;
            velocity.0 = Vec2::ZERO;
            state.dashing = false;
            debug!("Dash finished, {} enemies hit", dash.hit.len());
        }
    }
}

/// Landing or firing the grapple makes the dash available again.
pub(crate) fn reset_dash_readiness(
    mut landed: MessageReader<Landed>,
    mut fired: MessageReader<GrappleFired>,
    mut query: Query<&mut DashState, With<Player>>,
) {
    let entities = landed
        .read()
        .map(|event| event.entity)
        .chain(fired.read().map(|event| event.entity));

    for entity in entities {
        if let Ok(mut dash) = query.get_mut(entity)
            && !dash.ready
        {
            dash.ready = true;
            debug!("Dash ready");
        }
    }
}
