//! Grapple domain: cursor-aimed hook, rope swing and release.

mod components;
mod events;
pub mod physics;
mod systems;


pub use components::{Grapple, GrapplePhase, GrappleTuning, HookVisual};
pub use events::{GrappleAttached, GrappleFired, GrappleReleased};

use bevy::ecs::schedule::ScheduleConfigs;
use bevy::ecs::system::ScheduleSystem;
use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};
use crate::grapple::systems::{
    advance_hook, apply_swing, draw_rope, enforce_rope, fire_grapple, release_grapple,
};
use crate::movement::apply_gravity;

/// Hook travel and swing, after gravity has been applied for the frame.
pub(crate) fn swing_systems() -> ScheduleConfigs<ScheduleSystem> {
    (advance_hook, apply_swing).chain().after(apply_gravity)
}

pub struct GrapplePlugin;

impl Plugin for GrapplePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GrappleTuning>()
            .add_message::<GrappleFired>()
            .add_message::<GrappleAttached>()
            .add_message::<GrappleReleased>()
            .add_systems(
                Update,
                (release_grapple, fire_grapple)
                    .chain()
                    .in_set(GameplaySet::Act),
            )
            .add_systems(Update, swing_systems().in_set(GameplaySet::Physics))
            .add_systems(Update, enforce_rope.in_set(GameplaySet::Constrain))
            .add_systems(Update, draw_rope.run_if(in_state(GameState::Playing)));
    }
}
