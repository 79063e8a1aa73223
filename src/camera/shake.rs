//! Camera domain: random screen shake layered on top of the follow position.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use rand::Rng;

use crate::camera::{CameraFollow, CameraShake, MainCamera, ShakeRng};

#[derive(Debug)]
pub struct ShakeRequest {
    pub duration: f32,
    pub magnitude: f32,
}

impl Message for ShakeRequest {}

/// Offset with each axis drawn uniformly from `[-magnitude, magnitude]`.
pub fn sample_shake_offset(rng: &mut impl Rng, magnitude: f32) -> Vec2 {
    if magnitude <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        rng.random_range(-1.0_f32..=1.0) * magnitude,
        rng.random_range(-1.0_f32..=1.0) * magnitude,
    )
}

pub(crate) fn start_shakes(
    mut requests: MessageReader<ShakeRequest>,
    mut shake: ResMut<CameraShake>,
) {
    for request in requests.read() {
        shake.request(request.duration, request.magnitude);
    }
}

pub(crate) fn update_shake(
    time: Res<Time>,
    mut shake: ResMut<CameraShake>,
    mut rng: ResMut<ShakeRng>,
) {
    if !shake.is_active() {
        return;
    }

    shake.offset = sample_shake_offset(&mut rng.0, shake.magnitude);
    shake.remaining -= time.delta_secs();

    if shake.remaining <= 0.0 {
        *shake = CameraShake::default();
    }
}

/// Final camera position: follow anchor plus shake.
pub(crate) fn apply_camera_transform(
    shake: Res<CameraShake>,
    mut cameras: Query<(&CameraFollow, &mut Transform), With<MainCamera>>,
) {
    for (follow, mut transform) in &mut cameras {
        let position = follow.anchor + shake.offset;
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
