//! Core domain: game state definitions for the session flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    MainMenu,
    Playing,
    EndGame,
}

/// Ordered stages of a gameplay frame. Chained in `Update` and only run
/// while playing and unpaused.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum GameplaySet {
    /// Sample keyboard and mouse into input resources
    Input,
    /// Ground, wall and sensor queries against the physics world
    Sense,
    /// Decide actions: jumps, dash starts, hook fire, AI decisions
    Act,
    /// Write velocities
    Physics,
    /// Rope and other constraints over the written velocities
    Constrain,
    /// Damage, deaths, pickups and triggers
    Resolve,
}
