//! Combat domain: damage, contact hits, deaths and cleanup.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::camera::ShakeRequest;
use crate::combat::components::{
    ContactDamage, DeathTimer, DespawnTimer, Dying, Enemy, Health, Invulnerable,
};
use crate::combat::events::{DamageEvent, DeathEvent, PlayerDied};
use crate::combat::resources::CombatTuning;
use crate::core::EndGameRequested;
use crate::effects::spawn_death_burst;
use crate::movement::{MovementState, Player};

const PLAYER_BURST_COLOR: Color = Color::srgb(1.0, 0.95, 0.8);
const ENEMY_BURST_COLOR: Color = Color::srgb(0.9, 0.25, 0.2);
const CORPSE_COLOR: Color = Color::srgb(0.35, 0.2, 0.2);

pub(crate) fn update_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerable>) {
    let dt = time.delta_secs();
    for mut invuln in &mut query {
        if invuln.timer > 0.0 {
            invuln.timer -= dt;
        }
    }
}

/// Touching an enemy hurts the player, except while dashing through it.
pub(crate) fn detect_contact_damage(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    attackers: Query<&ContactDamage, Without<Dying>>,
    players: Query<&MovementState, (With<Player>, Without<Dying>)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (attacker, target) in pairs {
            let Ok(contact) = attackers.get(attacker) else {
                continue;
            };
            let Ok(state) = players.get(target) else {
                continue;
            };
            if state.dashing {
                continue;
            }

            damage_events.write(DamageEvent {
                source: attacker,
                target,
                amount: contact.amount,
            });
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut shake_requests: MessageWriter<ShakeRequest>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (
            &mut Health,
            Option<&mut Invulnerable>,
            Option<&Name>,
            Has<Player>,
        ),
        Without<Dying>,
    >,
) {
    for event in damage_events.read() {
        let Ok((mut health, invuln, name, is_player)) = query.get_mut(event.target) else {
            continue;
        };

        if health.is_dead() {
            continue;
        }
        if invuln.as_ref().is_some_and(|i| i.is_invulnerable()) {
            continue;
        }

        let applied = health.take_damage(event.amount);
        let label = name.map_or_else(|| format!("{:?}", event.target), |n| n.to_string());
        info!(
            "{} took {} damage; health now {}/{}",
            label, applied, health.current, health.max
        );

        if is_player {
            if let Some(mut invuln) = invuln {
                invuln.timer = tuning.iframes_duration;
            }
            shake_requests.write(ShakeRequest {
                duration: tuning.hit_shake_duration,
                magnitude: tuning.hit_shake_magnitude,
            });
        }

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut player_died: MessageWriter<PlayerDied>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (
            &Transform,
            &mut LinearVelocity,
            &mut Sprite,
            Has<Player>,
            Has<Enemy>,
        ),
        Without<Dying>,
    >,
) {
    for event in death_events.read() {
        let Ok((transform, mut velocity, mut sprite, is_player, is_enemy)) =
            query.get_mut(event.entity)
        else {
            continue;
        };
        let position = transform.translation.truncate();

        if is_player {
            spawn_death_burst(&mut commands, position, PLAYER_BURST_COLOR);
            commands
                .entity(event.entity)
                .insert((Dying, DeathTimer(tuning.player_death_delay)));
            player_died.write(PlayerDied);
            info!(
                "Player has died; ending game in {}s",
                tuning.player_death_delay
            );
        } else if is_enemy {
            spawn_death_burst(&mut commands, position, ENEMY_BURST_COLOR);
            velocity.0 = Vec2::ZERO;
            sprite.color = CORPSE_COLOR;
            commands.entity(event.entity).insert((
                Dying,
                RigidBodyDisabled,
                ColliderDisabled,
                DespawnTimer(tuning.enemy_destroy_delay),
            ));
            info!("Enemy {:?} defeated", event.entity);
        }
    }
}

/// Remove the dead player once its delay runs out and end the session.
pub(crate) fn tick_player_death(
    mut commands: Commands,
    time: Res<Time>,
    mut end_game: MessageWriter<EndGameRequested>,
    mut query: Query<(Entity, &mut DeathTimer), With<Player>>,
) {
    let dt = time.delta_secs();
    for (entity, mut timer) in &mut query {
        timer.0 -= dt;
        if timer.0 <= 0.0 {
            commands.entity(entity).despawn();
            end_game.write(EndGameRequested);
        }
    }
}

pub(crate) fn cleanup_dead_enemies(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DespawnTimer)>,
) {
    let dt = time.delta_secs();
    for (entity, mut timer) in &mut query {
        timer.0 -= dt;
        if timer.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
