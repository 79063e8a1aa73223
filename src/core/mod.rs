//! Core domain: session states, pause handling and end-game flow.

mod events;
mod resources;
mod state;
mod systems;


pub use events::{EndGameRequested, QuitToMenuRequested, RestartLevelRequested, StartGameRequested};
pub use resources::{GameplayPaused, gameplay_active};
pub use state::{GameState, GameplaySet};

use bevy::prelude::*;

use crate::core::systems::{
    clear_end_game_pause, handle_end_game, handle_quit_to_menu, handle_start_game,
    read_session_keys, sync_virtual_time, transition_to_main_menu,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .add_message::<StartGameRequested>()
            .add_message::<EndGameRequested>()
            .add_message::<RestartLevelRequested>()
            .add_message::<QuitToMenuRequested>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Sense,
                    GameplaySet::Act,
                    GameplaySet::Physics,
                    GameplaySet::Constrain,
                    GameplaySet::Resolve,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                transition_to_main_menu.run_if(in_state(GameState::Boot)),
            )
            .add_systems(
                Update,
                read_session_keys.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    handle_start_game,
                    handle_end_game,
                    handle_quit_to_menu,
                    sync_virtual_time,
                )
                    .chain(),
            )
            .add_systems(OnExit(GameState::EndGame), clear_end_game_pause);
    }
}
