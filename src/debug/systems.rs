//! Debug domain: hotkeys, invincibility and gizmo drawing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{DashState, DashTuning, Dying, Enemy, GroundEnemyAi, Health, Invulnerable};
use crate::debug::state::DebugState;
use crate::grapple::{Grapple, GrapplePhase};
use crate::movement::{MovementState, Player};

const DETECTION_COLOR: Color = Color::srgba(1.0, 0.9, 0.2, 0.6);
const GROUND_SENSOR_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);
const WALL_SENSOR_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);
const DASH_RADIUS_COLOR: Color = Color::srgb(1.0, 0.5, 0.1);
const ANCHOR_COLOR: Color = Color::srgb(0.3, 1.0, 0.5);
const ANCHOR_MARKER_RADIUS: f32 = 6.0;

/// Marker for debug info overlay (position, velocity, health)
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Endpoints of an enemy's wall sensor ray.
pub(crate) fn wall_sensor_segment(ai: &GroundEnemyAi, position: Vec2) -> (Vec2, Vec2) {
    (
        position,
        position + Vec2::X * ai.facing_sign() * ai.wall_sensor_distance,
    )
}

pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        let on = debug_state.toggle_gizmos();
        info!("[DEBUG] Gizmos {}", if on { "ON" } else { "OFF" });
    }

    if keyboard.just_pressed(KeyCode::F2) {
        let on = debug_state.toggle_info();
        info!("[DEBUG] Info overlay {}", if on { "ON" } else { "OFF" });
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if ctrl && keyboard.just_pressed(KeyCode::KeyI) {
        let on = debug_state.toggle_invincible();
        info!("[DEBUG] Invincibility {}", if on { "ON" } else { "OFF" });
    }
}

/// Apply invincibility effect to player
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<(&mut Health, &mut Invulnerable), (With<Player>, Without<Dying>)>,
) {
    if !debug_state.invincible {
        return;
    }

    for (mut health, mut invuln) in &mut player_query {
        invuln.timer = 1.0;
        if health.current < health.max {
            health.current = health.max;
        }
    }
}

pub(crate) fn draw_debug_gizmos(
    mut gizmos: Gizmos,
    dash_tuning: Res<DashTuning>,
    enemies: Query<(&Transform, &GroundEnemyAi), (With<Enemy>, Without<Dying>)>,
    players: Query<(&Transform, &DashState, &Grapple), With<Player>>,
) {
    for (transform, ai) in &enemies {
        let position = transform.translation.truncate();

        gizmos.circle_2d(
            Isometry2d::from_translation(position),
            ai.detection_radius,
            DETECTION_COLOR,
        );
        gizmos.circle_2d(
            Isometry2d::from_translation(ai.ground_sensor_position(position, ai.facing_sign())),
            ai.ground_sensor_radius,
            GROUND_SENSOR_COLOR,
        );
        let (start, end) = wall_sensor_segment(ai, position);
        gizmos.line_2d(start, end, WALL_SENSOR_COLOR);
    }

    for (transform, dash, grapple) in &players {
        let position = transform.translation.truncate();

        if dash.is_active() {
            gizmos.circle_2d(
                Isometry2d::from_translation(position),
                dash_tuning.damage_radius,
                DASH_RADIUS_COLOR,
            );
        }

        if let GrapplePhase::Attached { anchor, .. } = grapple.phase {
            gizmos.circle_2d(
                Isometry2d::from_translation(anchor),
                ANCHOR_MARKER_RADIUS,
                ANCHOR_COLOR,
            );
        }
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
        ZIndex(300),
    ));
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &LinearVelocity, &Health, &MovementState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, velocity, health, state)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nHP: {:.0}/{:.0}\nGrounded: {}\nDouble jump: {}\nInvincible: {}",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            health.current,
            health.max,
            state.on_ground,
            state.has_double_jump,
            debug_state.invincible
        );
    }
}

pub(crate) fn cleanup_debug_info_overlay(
    mut commands: Commands,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    for entity in &existing_overlay {
        commands.entity(entity).despawn();
    }
}
