//! Levels domain: level switching, trigger zones and pickup collection.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{CombatTuning, EnemyTuning};
use crate::content::{LevelRegistry, TriggerAction};
use crate::core::{EndGameRequested, RestartLevelRequested};
use crate::levels::spawn::spawn_level;
use crate::levels::{
    CurrentLevel, DoubleJumpPickup, LevelEntity, LevelTrigger, LoadLevelRequested,
};
use crate::movement::{MovementState, MovementTuning, Player};

pub(crate) const UNLOCKED_LABEL: &str = "Double Jump Unlocked!";

/// Grant the double jump. Returns false if the player already had it.
pub fn unlock_double_jump(state: &mut MovementState, tuning: &MovementTuning) -> bool {
    if state.has_double_jump {
        return false;
    }
    state.has_double_jump = true;
    state.air_jumps_remaining = tuning.unlocked_air_jumps;
    true
}

pub(crate) fn begin_session(
    registry: Res<LevelRegistry>,
    mut requests: MessageWriter<LoadLevelRequested>,
) {
    let Some(first) = registry.first_level_id() else {
        error!("No levels available to start");
        return;
    };
    requests.write(LoadLevelRequested {
        id: first.to_string(),
    });
}

pub(crate) fn restart_level(
    mut restarts: MessageReader<RestartLevelRequested>,
    current: Res<CurrentLevel>,
    mut requests: MessageWriter<LoadLevelRequested>,
) {
    if restarts.read().last().is_none() {
        return;
    }

    let Some(id) = current.id.clone() else {
        warn!("Restart requested with no level loaded");
        return;
    };
    info!("Restarting level '{}'", id);
    requests.write(LoadLevelRequested { id });
}

/// Replace the loaded level with the last requested one.
pub(crate) fn load_requested_level(
    mut commands: Commands,
    mut requests: MessageReader<LoadLevelRequested>,
    registry: Res<LevelRegistry>,
    combat: Res<CombatTuning>,
    enemy_tuning: Res<EnemyTuning>,
    mut current: ResMut<CurrentLevel>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };

    let Some(level) = registry.get(&request.id) else {
        warn!("Unknown level '{}' requested; ignoring", request.id);
        return;
    };

    for entity in &level_entities {
        commands.entity(entity).despawn();
    }

    spawn_level(&mut commands, level, &combat, &enemy_tuning);
    current.id = Some(level.id.clone());
    info!("Loaded level '{}'", level.id);
}

pub(crate) fn despawn_level(
    mut commands: Commands,
    mut current: ResMut<CurrentLevel>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    for entity in &level_entities {
        commands.entity(entity).despawn();
    }
    current.id = None;
}

pub(crate) fn detect_level_triggers(
    mut collision_events: MessageReader<CollisionStart>,
    mut load_requests: MessageWriter<LoadLevelRequested>,
    mut end_game: MessageWriter<EndGameRequested>,
    triggers: Query<&LevelTrigger>,
    players: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (trigger_entity, other) in pairs {
            let Ok(trigger) = triggers.get(trigger_entity) else {
                continue;
            };
            if !players.contains(other) {
                continue;
            }

            match &trigger.action {
                TriggerAction::LoadLevel(id) => {
                    info!("Player reached exit to '{}'", id);
                    load_requests.write(LoadLevelRequested { id: id.clone() });
                }
                TriggerAction::EndGame => {
                    info!("Player hit the end zone");
                    end_game.write(EndGameRequested);
                }
            }
            // One trigger per frame is enough
            return;
        }
    }
}

pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    tuning: Res<MovementTuning>,
    pickups: Query<&DoubleJumpPickup>,
    mut players: Query<&mut MovementState, With<Player>>,
    mut labels: Query<&mut Text2d>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (pickup_entity, other) in pairs {
            let Ok(pickup) = pickups.get(pickup_entity) else {
                continue;
            };
            let Ok(mut state) = players.get_mut(other) else {
                continue;
            };

            if !unlock_double_jump(&mut state, &tuning) {
                continue;
            }

            if let Some(label) = pickup.label
                && let Ok(mut text) = labels.get_mut(label)
            {
                text.0 = UNLOCKED_LABEL.to_string();
            }
            commands.entity(pickup_entity).despawn();
            info!("Double jump unlocked");
        }
    }
}
