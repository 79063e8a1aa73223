//! Levels domain: building a level's entities from its definition.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{CombatTuning, EnemyBundle, EnemyTuning};
use crate::content::{LevelDef, PickupDef, PickupKind, RectDef, TriggerDef};
use crate::levels::{DoubleJumpPickup, Grappleable, LevelEntity, LevelTrigger, PickupLabel};
use crate::movement::{GameLayer, Ground, Wall, spawn_player};

const GROUND_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const WALL_COLOR: Color = Color::srgb(0.3, 0.3, 0.4);
const ANCHOR_COLOR: Color = Color::srgb(0.55, 0.45, 0.3);
const TRIGGER_COLOR: Color = Color::srgba(0.3, 0.8, 1.0, 0.25);
const PICKUP_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
const PICKUP_SIZE: f32 = 20.0;
const LABEL_OFFSET: f32 = 30.0;
const LABEL_FONT_SIZE: f32 = 14.0;

fn block(rect: &RectDef, color: Color) -> (Sprite, Transform, RigidBody, Collider) {
    (
        Sprite {
            color,
            custom_size: Some(rect.size()),
            ..default()
        },
        Transform::from_xyz(rect.x, rect.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(rect.width, rect.height),
    )
}

/// Spawn every entity of `level` and return the player.
pub fn spawn_level(
    commands: &mut Commands,
    level: &LevelDef,
    combat: &CombatTuning,
    enemy_tuning: &EnemyTuning,
) -> Entity {
    info!("Spawning level '{}' ({})", level.id, level.name);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);
    let anchor_layers = CollisionLayers::new(GameLayer::Anchor, [GameLayer::Player]);

    for rect in &level.ground {
        commands.spawn((LevelEntity, Ground, block(rect, GROUND_COLOR), ground_layers));
    }

    for rect in &level.walls {
        commands.spawn((LevelEntity, Wall, block(rect, WALL_COLOR), wall_layers));
    }

    for rect in &level.anchors {
        commands.spawn((LevelEntity, Grappleable, block(rect, ANCHOR_COLOR), anchor_layers));
    }

    for (i, enemy) in level.enemies.iter().enumerate() {
        commands.spawn((
            LevelEntity,
            EnemyBundle::new(
                format!("Enemy {}", i + 1),
                Vec2::new(enemy.x, enemy.y),
                enemy.facing_right,
                enemy.max_health,
                enemy_tuning,
            ),
        ));
    }

    for pickup in &level.pickups {
        spawn_pickup(commands, pickup);
    }

    for trigger in &level.triggers {
        spawn_trigger(commands, trigger);
    }

    let (x, y) = level.player_spawn;
    let player = spawn_player(commands, Vec2::new(x, y), combat);
    commands.entity(player).insert(LevelEntity);

    debug!(
        "Level '{}': {} ground, {} walls, {} anchors, {} enemies, {} pickups, {} triggers",
        level.id,
        level.ground.len(),
        level.walls.len(),
        level.anchors.len(),
        level.enemies.len(),
        level.pickups.len(),
        level.triggers.len()
    );

    player
}

fn spawn_pickup(commands: &mut Commands, pickup: &PickupDef) {
    let label = commands
        .spawn((
            LevelEntity,
            PickupLabel,
            Text2d::new(pickup.label.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_xyz(pickup.x, pickup.y + LABEL_OFFSET, 5.0),
        ))
        .id();

    match pickup.kind {
        PickupKind::DoubleJump => {
            commands.spawn((
                LevelEntity,
                DoubleJumpPickup { label: Some(label) },
                Sprite {
                    color: PICKUP_COLOR,
                    custom_size: Some(Vec2::splat(PICKUP_SIZE)),
                    ..default()
                },
                Transform::from_xyz(pickup.x, pickup.y, 1.0),
                RigidBody::Static,
                Collider::circle(PICKUP_SIZE / 2.0),
                Sensor,
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
            ));
        }
    }
}

fn spawn_trigger(commands: &mut Commands, trigger: &TriggerDef) {
    let area = &trigger.area;
    commands.spawn((
        LevelEntity,
        LevelTrigger {
            action: trigger.action.clone(),
        },
        Sprite {
            color: TRIGGER_COLOR,
            custom_size: Some(area.size()),
            ..default()
        },
        Transform::from_xyz(area.x, area.y, -1.0),
        RigidBody::Static,
        Collider::rectangle(area.width, area.height),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}
