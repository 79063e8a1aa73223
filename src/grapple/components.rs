//! Grapple domain: hook state, tuning and markers.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the hook is in its cycle. Every phase returns to `Idle` on release.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GrapplePhase {
    #[default]
    Idle,
    /// Hook flying toward a confirmed hit point
    Traveling {
        hook_position: Vec2,
        target: Vec2,
        travel_time: f32,
    },
    /// Hook fixed in the world, rope limiting the player's distance to it
    Attached { anchor: Vec2, rope_length: f32 },
}

impl GrapplePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, GrapplePhase::Idle)
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, GrapplePhase::Attached { .. })
    }

    /// The far end of the rope, if one is out.
    pub fn rope_end(&self) -> Option<Vec2> {
        match *self {
            GrapplePhase::Idle => None,
            GrapplePhase::Traveling { hook_position, .. } => Some(hook_position),
            GrapplePhase::Attached { anchor, .. } => Some(anchor),
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct Grapple {
    pub phase: GrapplePhase,
    /// Sprite following the hook while it travels
    pub hook_visual: Option<Entity>,
}

/// Marker for the flying hook sprite
#[derive(Component, Debug)]
pub struct HookVisual;

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GrappleTuning {
    pub max_distance: f32,
    pub hook_travel_speed: f32,
    /// Hook counts as arrived within this distance of its target
    pub attach_distance: f32,
    /// Hook origin relative to the player's center
    pub hook_offset: (f32, f32),
    pub swing_force: f32,
    pub reel_force: f32,
    pub reel_speed: f32,
    pub min_rope_length: f32,
    /// Velocity kept per 1/60 s while swinging
    pub swing_damping: f32,
    pub max_swing_velocity: f32,
    pub boost_on_release: bool,
    pub release_boost: f32,
    pub hook_size: f32,
}

impl Default for GrappleTuning {
    fn default() -> Self {
        Self {
            max_distance: 800.0,
            hook_travel_speed: 1200.0,
            attach_distance: 8.0,
            hook_offset: (0.0, 12.0),
            swing_force: 600.0,
            reel_force: 800.0,
            reel_speed: 240.0,
            min_rope_length: 20.0,
            swing_damping: 0.995,
            max_swing_velocity: 800.0,
            boost_on_release: true,
            release_boost: 1.2,
            hook_size: 8.0,
        }
    }
}

impl GrappleTuning {
    pub fn hook_offset(&self) -> Vec2 {
        Vec2::new(self.hook_offset.0, self.hook_offset.1)
    }
}
