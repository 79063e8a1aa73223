//! UI domain: main menu with a settings panel for music volume.

use bevy::prelude::*;

use crate::audio::AudioSettings;
use crate::ui::widgets::{MUTED_TEXT_COLOR, MenuAction, TEXT_COLOR, button, overlay_root, title};

/// Which half of the main menu is visible
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuPanel {
    #[default]
    Main,
    Settings,
}

#[derive(Component, Debug)]
pub struct MainMenuUI;

#[derive(Component, Debug, Clone, Copy)]
pub(crate) struct PanelRoot(pub MenuPanel);

#[derive(Component, Debug)]
pub(crate) struct VolumeText;

pub(crate) fn volume_label(volume: f32) -> String {
    format!("Music Volume: {}%", (volume * 100.0).round() as i32)
}

pub(crate) fn spawn_main_menu(
    mut commands: Commands,
    mut panel: ResMut<MenuPanel>,
    audio: Res<AudioSettings>,
) {
    *panel = MenuPanel::Main;

    commands
        .spawn((
            MainMenuUI,
            overlay_root(Color::srgba(0.05, 0.05, 0.1, 0.98), 100),
        ))
        .with_children(|parent| {
            parent.spawn(title("GRAPPLE RUNNER", 64.0));

            parent.spawn((
                PanelRoot(MenuPanel::Main),
                Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    ..default()
                },
                children![
                    button("START", MenuAction::StartGame),
                    button("SETTINGS", MenuAction::OpenSettings),
                    button("QUIT", MenuAction::Quit),
                ],
            ));

            parent
                .spawn((
                    PanelRoot(MenuPanel::Settings),
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        display: Display::None,
                        ..default()
                    },
                ))
                .with_children(|settings| {
                    settings.spawn((
                        VolumeText,
                        Text::new(volume_label(audio.music_volume)),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        Node {
                            margin: UiRect::bottom(Val::Px(12.0)),
                            ..default()
                        },
                    ));
                    settings.spawn((
                        Node {
                            flex_direction: FlexDirection::Row,
                            ..default()
                        },
                        children![
                            button("-", MenuAction::VolumeDown),
                            button("+", MenuAction::VolumeUp),
                        ],
                    ));
                    settings.spawn(button("BACK", MenuAction::CloseSettings));
                });

            parent.spawn((
                Text::new("A/D move, Space jump, right mouse grapple, left mouse dash"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(MUTED_TEXT_COLOR),
                Node {
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn show_active_panel(
    panel: Res<MenuPanel>,
    mut roots: Query<(&PanelRoot, &mut Node)>,
) {
    if !panel.is_changed() {
        return;
    }

    for (root, mut node) in &mut roots {
        node.display = if root.0 == *panel {
            Display::Flex
        } else {
            Display::None
        };
    }
}

pub(crate) fn update_volume_text(
    audio: Res<AudioSettings>,
    mut texts: Query<&mut Text, With<VolumeText>>,
) {
    if !audio.is_changed() {
        return;
    }

    for mut text in &mut texts {
        text.0 = volume_label(audio.music_volume);
    }
}

pub(crate) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
