//! Grapple domain: swing, reel and rope rules as pure functions of
//! (position, velocity, anchor, input).
//!
//! Forces are treated as accelerations on a unit mass. Damping is expressed
//! per 1/60 s and rescaled by the frame time so the swing feels the same at
//! any frame rate.

use bevy::prelude::*;

use crate::grapple::GrappleTuning;

const REFERENCE_FRAME: f32 = 1.0 / 60.0;

/// Unit direction from `origin` toward `target`, or `None` when they coincide.
pub fn aim_direction(origin: Vec2, target: Vec2) -> Option<Vec2> {
    (target - origin).try_normalize()
}

/// Seconds the hook is given to cover `distance`.
pub fn hook_travel_time(distance: f32, tuning: &GrappleTuning) -> f32 {
    if tuning.hook_travel_speed <= 0.0 {
        return 0.0;
    }
    distance / tuning.hook_travel_speed
}

/// Move the hook a frame closer to its target. Closes `dt / travel_time` of
/// the remaining gap, so it eases in as it nears the target.
pub fn hook_travel_step(hook: Vec2, target: Vec2, dt: f32, travel_time: f32) -> Vec2 {
    if travel_time <= 0.0 {
        return target;
    }
    hook.lerp(target, (dt / travel_time).min(1.0))
}

pub fn hook_arrived(hook: Vec2, target: Vec2, tuning: &GrappleTuning) -> bool {
    hook.distance(target) < tuning.attach_distance
}

fn clamp_rope(length: f32, tuning: &GrappleTuning) -> f32 {
    length.clamp(tuning.min_rope_length, tuning.max_distance)
}

/// Rope length fixed at the moment the hook bites.
pub fn initial_rope_length(player: Vec2, anchor: Vec2, tuning: &GrappleTuning) -> f32 {
    clamp_rope(player.distance(anchor), tuning)
}

/// Holding up shortens the rope, holding down pays it out.
pub fn reel_rope(rope_length: f32, input_y: f32, tuning: &GrappleTuning, dt: f32) -> f32 {
    clamp_rope(rope_length - input_y * tuning.reel_speed * dt, tuning)
}

/// One frame of swing control on top of whatever gravity already did.
///
/// Horizontal input pushes along the tangent of the swing circle (right
/// swings clockwise, so it pushes left from below the anchor), vertical input pulls
/// toward or pushes away from the anchor. The result is damped and capped
/// at `max_swing_velocity`.
pub fn swing_velocity_step(
    position: Vec2,
    velocity: Vec2,
    anchor: Vec2,
    input: Vec2,
    tuning: &GrappleTuning,
    dt: f32,
) -> Vec2 {
    let mut velocity = velocity;

    if let Some(outward) = (position - anchor).try_normalize() {
        let tangent = -outward.perp();
        let swing = tangent * input.x * tuning.swing_force;
        let reel = -outward * input.y * tuning.reel_force;
        velocity += (swing + reel) * dt;
    }

    velocity *= tuning.swing_damping.powf(dt / REFERENCE_FRAME);
    velocity.clamp_length_max(tuning.max_swing_velocity)
}

/// Maximum-distance constraint. A player beyond the rope is pulled back onto
/// the circle and loses the outward part of its velocity; inside the circle
/// the rope is slack and nothing changes.
pub fn apply_rope_constraint(
    position: Vec2,
    velocity: Vec2,
    anchor: Vec2,
    rope_length: f32,
) -> (Vec2, Vec2) {
    let offset = position - anchor;
    let distance = offset.length();

    if distance <= rope_length || distance <= f32::EPSILON {
        return (position, velocity);
    }

    let outward = offset / distance;
    let constrained = anchor + outward * rope_length;

    let radial_speed = velocity.dot(outward);
    let velocity = if radial_speed > 0.0 {
        velocity - outward * radial_speed
    } else {
        velocity
    };

    (constrained, velocity)
}

/// Velocity carried out of a release.
pub fn release_velocity(velocity: Vec2, was_attached: bool, tuning: &GrappleTuning) -> Vec2 {
    if was_attached && tuning.boost_on_release {
        velocity * tuning.release_boost
    } else {
        velocity
    }
}
