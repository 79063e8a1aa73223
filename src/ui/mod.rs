//! UI domain: menus, HUD health bar, pause overlay and end screen.

mod end_screen;
mod hud_player;
mod main_menu;
mod pause;
mod widgets;

#[cfg(test)]
mod tests;

pub use main_menu::MenuPanel;
pub use widgets::MenuAction;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::end_screen::{cleanup_end_screen, handle_end_screen_keys, spawn_end_screen};
use crate::ui::hud_player::{
    cleanup_player_healthbar, spawn_player_healthbar_ui, update_player_healthbar,
};
use crate::ui::main_menu::{
    cleanup_main_menu, show_active_panel, spawn_main_menu, update_volume_text,
};
use crate::ui::pause::{cleanup_pause_overlay, sync_pause_overlay};
use crate::ui::widgets::{button_feedback, handle_menu_actions};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuPanel>()
            .add_systems(Update, (button_feedback, handle_menu_actions))
            // Main menu
            .add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(OnExit(GameState::MainMenu), cleanup_main_menu)
            .add_systems(
                Update,
                (show_active_panel, update_volume_text).run_if(in_state(GameState::MainMenu)),
            )
            // HUD and pause
            .add_systems(OnEnter(GameState::Playing), spawn_player_healthbar_ui)
            .add_systems(
                OnExit(GameState::Playing),
                (cleanup_player_healthbar, cleanup_pause_overlay),
            )
            .add_systems(
                Update,
                (update_player_healthbar, sync_pause_overlay).run_if(in_state(GameState::Playing)),
            )
            // End screen
            .add_systems(OnEnter(GameState::EndGame), spawn_end_screen)
            .add_systems(OnExit(GameState::EndGame), cleanup_end_screen)
            .add_systems(
                Update,
                handle_end_screen_keys.run_if(in_state(GameState::EndGame)),
            );
    }
}
