//! UI domain: end-of-game screen with restart and menu buttons.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::StartGameRequested;
use crate::ui::widgets::{MUTED_TEXT_COLOR, MenuAction, TEXT_COLOR, button, overlay_root, title};

#[derive(Component, Debug)]
pub struct EndScreenUI;

pub(crate) fn spawn_end_screen(mut commands: Commands) {
    commands.spawn((
        EndScreenUI,
        overlay_root(Color::srgba(0.02, 0.05, 0.1, 0.98), 200),
        children![
            title("THE END", 72.0),
            (
                Text::new("Thanks for playing."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ),
            button("RESTART", MenuAction::RestartGame),
            button("MAIN MENU", MenuAction::MainMenu),
            (
                Text::new("Press [Enter] to restart"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(MUTED_TEXT_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ),
        ],
    ));
}

pub(crate) fn handle_end_screen_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut start: MessageWriter<StartGameRequested>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        start.write(StartGameRequested);
    }
}

pub(crate) fn cleanup_end_screen(mut commands: Commands, query: Query<Entity, With<EndScreenUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
