//! UI domain: shared button widget and click routing.

use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::AudioSettings;
use crate::core::{QuitToMenuRequested, StartGameRequested};
use crate::ui::main_menu::MenuPanel;

pub(crate) const BUTTON_COLOR: Color = Color::srgb(0.2, 0.2, 0.25);
pub(crate) const BUTTON_HOVER_COLOR: Color = Color::srgb(0.3, 0.3, 0.38);
pub(crate) const BUTTON_PRESSED_COLOR: Color = Color::srgb(0.4, 0.4, 0.5);
pub(crate) const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.9);
pub(crate) const MUTED_TEXT_COLOR: Color = Color::srgb(0.6, 0.6, 0.7);
pub(crate) const TITLE_COLOR: Color = Color::srgb(0.9, 0.75, 0.3);

/// What a button does when clicked
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    OpenSettings,
    CloseSettings,
    VolumeDown,
    VolumeUp,
    Quit,
    RestartGame,
    MainMenu,
}

pub(crate) fn button(label: &str, action: MenuAction) -> impl Bundle {
    (
        action,
        Button,
        Node {
            width: Val::Px(220.0),
            padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
            margin: UiRect::all(Val::Px(8.0)),
            border: UiRect::all(Val::Px(2.0)),
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(BUTTON_COLOR),
        BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        children![(
            Text::new(label),
            TextFont {
                font_size: 26.0,
                ..default()
            },
            TextColor(TEXT_COLOR),
        )],
    )
}

/// Full-screen centered column, drawn above the world
pub(crate) fn overlay_root(background: Color, z: i32) -> impl Bundle {
    (
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
        ZIndex(z),
    )
}

pub(crate) fn title(text: &str, size: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(TITLE_COLOR),
        Node {
            margin: UiRect::bottom(Val::Px(40.0)),
            ..default()
        },
    )
}

pub(crate) fn button_feedback(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (With<Button>, Changed<Interaction>)>,
) {
    for (interaction, mut background) in &mut buttons {
        background.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESSED_COLOR,
            Interaction::Hovered => BUTTON_HOVER_COLOR,
            Interaction::None => BUTTON_COLOR,
        };
    }
}

pub(crate) fn handle_menu_actions(
    buttons: Query<(&Interaction, &MenuAction), Changed<Interaction>>,
    mut panel: ResMut<MenuPanel>,
    mut audio: ResMut<AudioSettings>,
    mut start: MessageWriter<StartGameRequested>,
    mut to_menu: MessageWriter<QuitToMenuRequested>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, action) in &buttons {
        if *interaction != Interaction::Pressed {
            continue;
        }

        debug!("Menu action {:?}", action);
        match action {
            MenuAction::StartGame | MenuAction::RestartGame => {
                start.write(StartGameRequested);
            }
            MenuAction::OpenSettings => *panel = MenuPanel::Settings,
            MenuAction::CloseSettings => *panel = MenuPanel::Main,
            MenuAction::VolumeDown => audio.step_volume(-1.0),
            MenuAction::VolumeUp => audio.step_volume(1.0),
            MenuAction::MainMenu => {
                to_menu.write(QuitToMenuRequested);
            }
            MenuAction::Quit => {
                info!("Quitting");
                exit.write(AppExit::Success);
            }
        }
    }
}
