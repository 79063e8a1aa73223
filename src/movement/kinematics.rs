//! Movement domain: engine-free velocity rules for running, jumping and falling.

use crate::movement::{Facing, MovementState, MovementTuning};

/// Inputs below this magnitude count as "no input"
const INPUT_DEADZONE: f32 = 0.01;
/// Horizontal speed needed before facing follows velocity
const FACING_SPEED_THRESHOLD: f32 = 0.1;
/// Exponent shaping how strongly the gap to target speed drives acceleration
const ACCEL_POWER: f32 = 0.9;
/// Upward speed above which a foot ray hit does not count as standing
const STANDING_RISE_TOLERANCE: f32 = 1.0;

/// One frame of horizontal velocity change toward `input_x * max_speed`.
///
/// The step is `(|target - vx| * rate)^0.9 * dt`, where `rate` picks the
/// ground or air, accelerate or decelerate constant. The step never carries
/// the velocity past the target, and the result stays within `±max_speed`.
pub fn horizontal_velocity_step(
    vx: f32,
    input_x: f32,
    grounded: bool,
    tuning: &MovementTuning,
    dt: f32,
) -> f32 {
    let target = input_x * tuning.max_speed;
    let diff = target - vx;
    let accelerating = target.abs() > INPUT_DEADZONE;

    let rate = match (grounded, accelerating) {
        (true, true) => tuning.ground_accel,
        (true, false) => tuning.ground_decel,
        (false, true) => tuning.air_accel,
        (false, false) => tuning.air_decel,
    };

    let step = ((diff.abs() * rate).powf(ACCEL_POWER) * dt).min(diff.abs());
    let next = if diff >= 0.0 { vx + step } else { vx - step };

    next.clamp(-tuning.max_speed, tuning.max_speed)
}

/// One frame of gravity. Rising without the jump button held falls harder
/// (short hop), and so does any descent.
pub fn gravity_step(vy: f32, jump_held: bool, tuning: &MovementTuning, dt: f32) -> f32 {
    let multiplier = if vy > 0.0 && !jump_held {
        tuning.low_jump_multiplier
    } else if vy < 0.0 {
        tuning.fall_multiplier
    } else {
        1.0
    };

    (vy - tuning.gravity * multiplier * dt).max(-tuning.max_fall_speed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// From the ground or within the coyote window
    Ground,
    /// Mid-air jump granted by the double jump unlock
    Air,
}

/// Decide whether a buffered jump fires this frame.
pub fn resolve_jump(state: &MovementState, tuning: &MovementTuning) -> Option<JumpKind> {
    if state.jump_buffer_timer <= 0.0 {
        return None;
    }

    if state.on_ground || state.coyote_timer < tuning.coyote_time {
        Some(JumpKind::Ground)
    } else if state.has_double_jump && state.air_jumps_remaining > 0 {
        Some(JumpKind::Air)
    } else {
        None
    }
}

/// Fold one frame of the foot ray into the state. Returns true on landing.
///
/// A body still rising off a jump is airborne even while the ray reaches
/// the floor.
pub fn apply_ground_contact(
    state: &mut MovementState,
    ray_hit: bool,
    vy: f32,
    tuning: &MovementTuning,
) -> bool {
    let was_on_ground = state.on_ground;
    state.on_ground = ray_hit && vy <= STANDING_RISE_TOLERANCE;

    if !state.on_ground {
        return false;
    }

    state.coyote_timer = 0.0;
    if was_on_ground {
        return false;
    }

    state.air_jumps_remaining = if state.has_double_jump {
        tuning.unlocked_air_jumps
    } else {
        0
    };
    true
}

/// Facing follows the direction of travel once moving fast enough.
pub fn facing_from_velocity(vx: f32, current: Facing) -> Facing {
    if vx.abs() > FACING_SPEED_THRESHOLD {
        Facing::from_direction(vx).unwrap_or(current)
    } else {
        current
    }
}
