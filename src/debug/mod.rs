//! Debug domain: gizmo overlay for enemy sensors, dash radius and grapple
//! anchor, plus an invincibility toggle and a player info readout.
//!
//! Keys: F1 gizmos, F2 info overlay, Ctrl+I invincibility.

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    apply_invincibility, cleanup_debug_info_overlay, draw_debug_gizmos, handle_debug_hotkeys,
    update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (handle_debug_hotkeys, apply_invincibility).chain())
            .add_systems(
                Update,
                (
                    draw_debug_gizmos.run_if(|state: Res<DebugState>| state.gizmos_visible),
                    update_debug_info_overlay,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_debug_info_overlay);
    }
}
