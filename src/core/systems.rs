//! Core domain: session flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::events::{
    EndGameRequested, QuitToMenuRequested, RestartLevelRequested, StartGameRequested,
};
use crate::core::resources::{END_GAME_PAUSE, GameplayPaused};
use crate::core::state::GameState;

pub(crate) fn transition_to_main_menu(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::MainMenu);
}

/// Escape toggles the manual pause, R restarts the level.
pub(crate) fn read_session_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut restart: MessageWriter<RestartLevelRequested>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let pause = !paused.is_manually_paused();
        paused.set_pause(pause);
        info!("Gameplay {}", if pause { "paused" } else { "resumed" });
    }

    if keyboard.just_pressed(KeyCode::KeyR) && !paused.is_paused() {
        restart.write(RestartLevelRequested);
    }
}

/// Mirror the pause set onto virtual time so physics stops with gameplay.
pub(crate) fn sync_virtual_time(paused: Res<GameplayPaused>, mut time: ResMut<Time<Virtual>>) {
    if !paused.is_changed() {
        return;
    }

    if paused.is_paused() && !time.is_paused() {
        time.pause();
    } else if !paused.is_paused() && time.is_paused() {
        time.unpause();
    }
}

pub(crate) fn handle_start_game(
    mut events: MessageReader<StartGameRequested>,
    mut paused: ResMut<GameplayPaused>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().last().is_none() {
        return;
    }

    paused.clear();
    game_state.set(GameState::Playing);
    info!("Starting game");
}

pub(crate) fn handle_end_game(
    mut events: MessageReader<EndGameRequested>,
    state: Res<State<GameState>>,
    mut paused: ResMut<GameplayPaused>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().last().is_none() {
        return;
    }

    if *state.get() != GameState::Playing {
        return;
    }

    info!("End of game reached");
    paused.pause(END_GAME_PAUSE);
    game_state.set(GameState::EndGame);
}

pub(crate) fn handle_quit_to_menu(
    mut events: MessageReader<QuitToMenuRequested>,
    mut paused: ResMut<GameplayPaused>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().last().is_none() {
        return;
    }

    paused.clear();
    game_state.set(GameState::MainMenu);
    info!("Returning to main menu");
}

pub(crate) fn clear_end_game_pause(mut paused: ResMut<GameplayPaused>) {
    paused.unpause(END_GAME_PAUSE);
}
