//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub ground_accel: f32,
    pub ground_decel: f32,
    pub air_accel: f32,
    pub air_decel: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Gravity multiplier while rising with jump released
    pub low_jump_multiplier: f32,
    /// Gravity multiplier while falling
    pub fall_multiplier: f32,
    /// Air jumps granted once the double jump is unlocked
    pub unlocked_air_jumps: u8,
    pub ground_ray_length: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            ground_accel: 120.0,
            ground_decel: 120.0,
            air_accel: 60.0,
            air_decel: 60.0,
            jump_velocity: 560.0,
            gravity: 980.0,
            max_fall_speed: 1200.0,
            coyote_time: 0.1,
            jump_buffer_time: 0.1,
            low_jump_multiplier: 3.0,
            fall_multiplier: 2.5,
            unlocked_air_jumps: 1,
            ground_ray_length: 4.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
}

/// Mouse-driven actions, with the cursor projected into world space.
#[derive(Resource, Debug, Default)]
pub struct PointerInput {
    pub aim_world: Option<Vec2>,
    pub grapple_pressed: bool,
    /// Level rather than edge, so a release missed while paused still lands
    pub grapple_held: bool,
    pub dash_pressed: bool,
}
