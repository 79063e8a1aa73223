//! UI domain: tests for HUD colours, menu routing and the pause overlay.

use bevy::app::AppExit;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::hud_player::health_bar_color;
use super::main_menu::{PanelRoot, show_active_panel, volume_label};
use super::pause::{PauseOverlayUI, sync_pause_overlay};
use super::widgets::handle_menu_actions;
use super::{MenuAction, MenuPanel};
use crate::audio::AudioSettings;
use crate::core::{GameplayPaused, QuitToMenuRequested, StartGameRequested};

fn menu_world() -> World {
    let mut world = World::new();
    world.init_resource::<MenuPanel>();
    world.init_resource::<AudioSettings>();
    world.init_resource::<Messages<StartGameRequested>>();
    world.init_resource::<Messages<QuitToMenuRequested>>();
    world.init_resource::<Messages<AppExit>>();
    world
}

fn press(world: &mut World, action: MenuAction) {
    let button = world.spawn((action, Interaction::Pressed)).id();
    world.run_system_once(handle_menu_actions).unwrap();
    world.despawn(button);
}

fn message_count<M: bevy::ecs::message::Message>(world: &World) -> usize {
    world.resource::<Messages<M>>().len()
}

#[test]
fn test_health_bar_goes_green_to_red() {
    let full = health_bar_color(1.0).to_srgba();
    let half = health_bar_color(0.5).to_srgba();
    let empty = health_bar_color(0.0).to_srgba();

    assert!(full.green > full.red, "full health is green");
    assert!(half.red > 0.5 && half.green > 0.5, "half health is yellow");
    assert!(empty.red > empty.green, "empty health is red");
}

#[test]
fn test_volume_label_shows_percent() {
    assert_eq!(volume_label(0.5), "Music Volume: 50%");
    assert_eq!(volume_label(1.0), "Music Volume: 100%");
}

#[test]
fn test_settings_buttons_switch_panels() {
    let mut world = menu_world();

    press(&mut world, MenuAction::OpenSettings);
    assert_eq!(*world.resource::<MenuPanel>(), MenuPanel::Settings);

    press(&mut world, MenuAction::CloseSettings);
    assert_eq!(*world.resource::<MenuPanel>(), MenuPanel::Main);
}

#[test]
fn test_volume_buttons_step_music_volume() {
    let mut world = menu_world();

    press(&mut world, MenuAction::VolumeUp);
    assert!((world.resource::<AudioSettings>().music_volume - 0.6).abs() < 1e-6);

    press(&mut world, MenuAction::VolumeDown);
    press(&mut world, MenuAction::VolumeDown);
    assert!((world.resource::<AudioSettings>().music_volume - 0.4).abs() < 1e-6);
}

#[test]
fn test_session_buttons_write_requests() {
    let mut world = menu_world();

    press(&mut world, MenuAction::StartGame);
    assert_eq!(message_count::<StartGameRequested>(&world), 1);

    press(&mut world, MenuAction::MainMenu);
    assert_eq!(message_count::<QuitToMenuRequested>(&world), 1);

    press(&mut world, MenuAction::Quit);
    assert_eq!(message_count::<AppExit>(&world), 1);
}

#[test]
fn test_hovered_button_does_nothing() {
    let mut world = menu_world();
    world.spawn((MenuAction::StartGame, Interaction::Hovered));
    world.run_system_once(handle_menu_actions).unwrap();
    assert_eq!(message_count::<StartGameRequested>(&world), 0);
}

#[test]
fn test_only_active_panel_is_displayed() {
    let mut world = menu_world();
    let main = world
        .spawn((PanelRoot(MenuPanel::Main), Node::default()))
        .id();
    let settings = world
        .spawn((PanelRoot(MenuPanel::Settings), Node::default()))
        .id();

    *world.resource_mut::<MenuPanel>() = MenuPanel::Settings;
    world.run_system_once(show_active_panel).unwrap();

    assert_eq!(world.get::<Node>(main).unwrap().display, Display::None);
    assert_eq!(world.get::<Node>(settings).unwrap().display, Display::Flex);
}

#[test]
fn test_pause_overlay_follows_manual_pause() {
    let mut world = World::new();
    world.init_resource::<GameplayPaused>();

    world.resource_mut::<GameplayPaused>().set_pause(true);
    world.run_system_once(sync_pause_overlay).unwrap();
    let count =
        |world: &mut World| world.query_filtered::<(), With<PauseOverlayUI>>().iter(world).count();
    assert_eq!(count(&mut world), 1);

    world.run_system_once(sync_pause_overlay).unwrap();
    assert_eq!(count(&mut world), 1, "overlay is not duplicated");

    world.resource_mut::<GameplayPaused>().set_pause(false);
    world.run_system_once(sync_pause_overlay).unwrap();
    assert_eq!(count(&mut world), 0);
}
