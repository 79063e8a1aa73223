//! Camera domain: smoothed follow and speed-based zoom.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::camera::{CameraFollow, CameraTuning, MainCamera};
use crate::combat::{Dying, PlayerDied};
use crate::movement::Player;

/// Fraction of the remaining gap closed this frame for a decay rate `speed`.
pub fn smoothing_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

/// Orthographic scale the camera eases toward at `speed`.
pub fn target_zoom_scale(speed: f32, tuning: &CameraTuning) -> f32 {
    let t = if tuning.max_player_speed > 0.0 {
        (speed / tuning.max_player_speed).clamp(0.0, 1.0)
    } else {
        0.0
    };
    tuning.base_scale + tuning.max_scale_increase * t
}

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    commands.spawn((
        Camera2d,
        MainCamera,
        CameraFollow::default(),
        Projection::Orthographic(OrthographicProjection {
            scale: tuning.base_scale,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Re-acquire the player when the camera has no live target.
pub(crate) fn acquire_target(
    mut cameras: Query<&mut CameraFollow, With<MainCamera>>,
    players: Query<(Entity, &Transform), (With<Player>, Without<Dying>)>,
) {
    for mut follow in &mut cameras {
        if follow.target.is_some_and(|target| players.contains(target)) {
            continue;
        }
        let Some((player, transform)) = players.iter().next() else {
            continue;
        };
        // Snap so the camera doesn't sweep across the level
        follow.anchor = transform.translation.truncate();
        follow.target = Some(player);
        debug!("Camera following {:?}", player);
    }
}

pub(crate) fn release_target_on_death(
    mut player_died: MessageReader<PlayerDied>,
    mut cameras: Query<&mut CameraFollow, With<MainCamera>>,
) {
    if player_died.is_empty() {
        return;
    }
    player_died.clear();

    for mut follow in &mut cameras {
        follow.target = None;
    }
}

pub(crate) fn follow_target(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    mut cameras: Query<(&mut CameraFollow, &mut Projection), With<MainCamera>>,
    targets: Query<(&Transform, Option<&LinearVelocity>), Without<MainCamera>>,
) {
    let dt = time.delta_secs();

    for (mut follow, mut projection) in &mut cameras {
        let Some(target) = follow.target else {
            continue;
        };
        let Ok((transform, velocity)) = targets.get(target) else {
            continue;
        };

        let desired = transform.translation.truncate() + tuning.offset();
        let anchor = follow.anchor;
        follow.anchor = anchor.lerp(desired, smoothing_factor(tuning.smooth_speed, dt));

        if let Projection::Orthographic(ortho) = &mut *projection {
            let speed = velocity.map_or(0.0, |v| v.length());
            let scale = target_zoom_scale(speed, &tuning);
            ortho.scale += (scale - ortho.scale) * smoothing_factor(tuning.zoom_speed, dt);
        }
    }
}
