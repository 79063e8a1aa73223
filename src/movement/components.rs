//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Hookable blocks hanging in the air
    Anchor,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Sensors (level exits, pickups) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    /// Seconds since the player last stood on ground
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub air_jumps_remaining: u8,
    /// Unlocked by the double jump pickup
    pub has_double_jump: bool,
    /// Set by the dash attack while it owns the velocity
    pub dashing: bool,
    /// Set by the grapple while the hook is attached
    pub grappling: bool,
}

impl MovementState {
    /// State for a freshly spawned player. The coyote window starts closed
    /// so a player spawned in the air cannot ground jump before landing.
    pub fn spawned() -> Self {
        Self {
            coyote_timer: f32::MAX,
            ..Default::default()
        }
    }

    /// Whether regular run/jump/gravity control applies this frame.
    pub fn has_free_control(&self) -> bool {
        !self.dashing && !self.grappling
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn from_direction(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
