mod audio;
mod camera;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod effects;
mod grapple;
mod levels;
mod movement;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Grapple Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default().with_length_unit(40.0))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        levels::LevelsPlugin,
        movement::MovementPlugin,
        grapple::GrapplePlugin,
        combat::CombatPlugin,
        camera::CameraPlugin,
        effects::EffectsPlugin,
        audio::MusicPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
