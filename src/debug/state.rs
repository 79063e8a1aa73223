//! Debug domain: toggles for the developer overlay.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Sensor, radius and anchor gizmos
    pub gizmos_visible: bool,
    /// Whether player is invincible
    pub invincible: bool,
    /// Whether to show debug info overlay (position, velocity, health)
    pub show_info: bool,
}

impl DebugState {
    pub fn toggle_gizmos(&mut self) -> bool {
        self.gizmos_visible = !self.gizmos_visible;
        self.gizmos_visible
    }

    pub fn toggle_invincible(&mut self) -> bool {
        self.invincible = !self.invincible;
        self.invincible
    }

    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }
}
