//! UI domain: overlay shown while gameplay is manually paused.

use bevy::prelude::*;

use crate::core::GameplayPaused;
use crate::ui::widgets::{MUTED_TEXT_COLOR, overlay_root, title};

#[derive(Component, Debug)]
pub struct PauseOverlayUI;

fn spawn_pause_overlay(commands: &mut Commands) {
    commands.spawn((
        PauseOverlayUI,
        overlay_root(Color::srgba(0.0, 0.0, 0.0, 0.6), 150),
        children![
            title("PAUSED", 64.0),
            (
                Text::new("Press [Esc] to resume"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(MUTED_TEXT_COLOR),
            ),
        ],
    ));
}

pub(crate) fn sync_pause_overlay(
    mut commands: Commands,
    paused: Res<GameplayPaused>,
    overlays: Query<Entity, With<PauseOverlayUI>>,
) {
    let shown = !overlays.is_empty();
    let wanted = paused.is_manually_paused();

    if wanted && !shown {
        spawn_pause_overlay(&mut commands);
    } else if !wanted && shown {
        for entity in &overlays {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn cleanup_pause_overlay(
    mut commands: Commands,
    overlays: Query<Entity, With<PauseOverlayUI>>,
) {
    for entity in &overlays {
        commands.entity(entity).despawn();
    }
}
