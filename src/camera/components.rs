//! Camera domain: camera markers, follow state and tuning.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Marker for the gameplay camera
#[derive(Component, Debug)]
pub struct MainCamera;

#[derive(Component, Debug, Default)]
pub struct CameraFollow {
    pub target: Option<Entity>,
    /// Smoothed follow position before shake is added
    pub anchor: Vec2,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraTuning {
    pub offset: (f32, f32),
    pub smooth_speed: f32,
    pub base_scale: f32,
    /// Extra orthographic scale reached at `max_player_speed`
    pub max_scale_increase: f32,
    pub zoom_speed: f32,
    pub max_player_speed: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            offset: (0.0, 80.0),
            smooth_speed: 10.0,
            base_scale: 1.0,
            max_scale_increase: 0.2,
            zoom_speed: 5.0,
            max_player_speed: 800.0,
        }
    }
}

impl CameraTuning {
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset.0, self.offset.1)
    }
}

/// Current screen shake, if any.
#[derive(Resource, Debug, Default)]
pub struct CameraShake {
    pub remaining: f32,
    pub magnitude: f32,
    pub offset: Vec2,
}

impl CameraShake {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// A new request only replaces a weaker or shorter one.
    pub fn request(&mut self, duration: f32, magnitude: f32) {
        self.remaining = self.remaining.max(duration);
        self.magnitude = self.magnitude.max(magnitude);
    }
}

#[derive(Resource, Debug)]
pub struct ShakeRng(pub ChaCha8Rng);

impl ShakeRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
