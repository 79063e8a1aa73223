//! Camera domain: follow with offset, speed-based zoom and screen shake.

mod components;
pub mod follow;
pub mod shake;

#[cfg(test)]
mod tests;

pub use components::{CameraFollow, CameraShake, CameraTuning, MainCamera, ShakeRng};
pub use shake::ShakeRequest;

use bevy::prelude::*;

use crate::camera::follow::{acquire_target, follow_target, release_target_on_death, setup_camera};
use crate::camera::shake::{apply_camera_transform, start_shakes, update_shake};
use crate::core::{GameState, GameplaySet, gameplay_active};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<CameraShake>()
            .insert_resource(ShakeRng::from_seed(rand::random()))
            .add_message::<ShakeRequest>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    release_target_on_death,
                    acquire_target,
                    follow_target,
                    start_shakes,
                    update_shake,
                    apply_camera_transform,
                )
                    .chain()
                    .after(GameplaySet::Resolve)
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            );
    }
}
