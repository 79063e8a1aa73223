//! Core domain: shared resources for pause handling.

use bevy::prelude::*;
use std::collections::HashSet;

/// Pause source used by the player-facing pause toggle.
pub const MANUAL_PAUSE: &str = "manual";
/// Pause source held while the end screen is up.
pub const END_GAME_PAUSE: &str = "end_game";

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    /// Set or clear the manual pause.
    pub fn set_pause(&mut self, pause: bool) {
        if pause {
            self.pause(MANUAL_PAUSE);
        } else {
            self.unpause(MANUAL_PAUSE);
        }
    }

    pub fn is_manually_paused(&self) -> bool {
        self.sources.contains(MANUAL_PAUSE)
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}
