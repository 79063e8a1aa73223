//! Movement domain: locomotion systems for timers and physics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::kinematics::{
    JumpKind, facing_from_velocity, gravity_step, horizontal_velocity_step, resolve_jump,
};
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MovementState, With<Player>>) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        // Coyote time: starts counting when leaving ground
        if !state.on_ground {
            state.coyote_timer += dt;
        }

        // Jump buffer: counts down after pressing jump
        if state.jump_buffer_timer > 0.0 {
            state.jump_buffer_timer -= dt;
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        // Buffer jump input
        if input.jump_just_pressed {
            state.jump_buffer_timer = tuning.jump_buffer_time;
        }

        if !state.has_free_control() {
            continue;
        }

        match resolve_jump(&state, &tuning) {
            Some(JumpKind::Ground) => {
                velocity.y = tuning.jump_velocity;
                state.jump_buffer_timer = 0.0;
                state.coyote_timer = tuning.coyote_time; // Consume coyote time
                state.on_ground = false;
                debug!("Ground jump");
            }
            Some(JumpKind::Air) => {
                velocity.y = tuning.jump_velocity;
                state.jump_buffer_timer = 0.0;
                state.air_jumps_remaining -= 1;
                debug!(
                    "Air jump: air_jumps_remaining now {}",
                    state.air_jumps_remaining
                );
            }
            None => {}
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        if !state.has_free_control() {
            continue;
        }

        velocity.x =
            horizontal_velocity_step(velocity.x, input.axis.x, state.on_ground, &tuning, dt);
    }
}

/// Gravity is handled here rather than by the solver (bodies use GravityScale(0)).
/// The grapple keeps gravity on so the pendulum has something to swing with.
pub(crate) fn apply_gravity(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        if state.dashing {
            continue;
        }

        // Plain gravity on the rope, jump shaping only applies to free flight
        velocity.y = if state.grappling {
            velocity.y - tuning.gravity * dt
        } else {
            gravity_step(velocity.y, input.jump_held, &tuning, dt)
        };
    }
}

pub(crate) fn update_facing(
    mut query: Query<(&mut MovementState, &LinearVelocity, &mut Sprite), With<Player>>,
) {
    for (mut state, velocity, mut sprite) in &mut query {
        // The dash sets facing toward its aim itself
        if state.dashing {
            continue;
        }

        state.facing = facing_from_velocity(velocity.x, state.facing);
        sprite.flip_x = state.facing == crate::movement::Facing::Left;
    }
}
