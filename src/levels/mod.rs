//! Levels domain: spawning level geometry, switching levels and pickups.

mod components;
mod spawn;
mod systems;


pub use components::{
    CurrentLevel, DoubleJumpPickup, Grappleable, LevelEntity, LevelTrigger, LoadLevelRequested,
    PickupLabel,
};
pub use spawn::spawn_level;
pub use systems::unlock_double_jump;

use bevy::prelude::*;

use crate::core::{GameState, GameplaySet};
use crate::levels::systems::{
    begin_session, collect_pickups, despawn_level, detect_level_triggers, load_requested_level,
    restart_level,
};

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLevel>()
            .add_message::<LoadLevelRequested>()
            .add_systems(OnEnter(GameState::Playing), begin_session)
            .add_systems(OnExit(GameState::Playing), despawn_level)
            .add_systems(
                Update,
                (detect_level_triggers, collect_pickups).in_set(GameplaySet::Resolve),
            )
            .add_systems(
                Update,
                (restart_level, load_requested_level)
                    .chain()
                    .after(GameplaySet::Resolve)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
