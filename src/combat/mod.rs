//! Combat domain: health, contact damage, dash attack and ground enemy AI.

pub mod ai;
mod components;
mod dash;
mod events;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ContactDamage, DashState, DeathTimer, DespawnTimer, Dying, Enemy, GroundEnemyAi, Health,
    Invulnerable,
};
pub use dash::dash_direction;
pub use events::{DamageEvent, DeathEvent, PlayerDied};
pub use resources::{CombatTuning, DashTuning, EnemyTuning};
pub use spawn::EnemyBundle;

use bevy::prelude::*;

use crate::combat::ai::ground::{stand_down_on_player_death, update_ground_enemies};
use crate::combat::dash::{reset_dash_readiness, start_dash, strike_enemies, update_dash};
use crate::combat::systems::{
    apply_damage, cleanup_dead_enemies, detect_contact_damage, process_deaths,
    tick_player_death, update_invulnerability,
};
use crate::core::GameplaySet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<DashTuning>()
            .init_resource::<EnemyTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_message::<PlayerDied>()
            .add_systems(
                Update,
                (update_invulnerability, stand_down_on_player_death).in_set(GameplaySet::Sense),
            )
            .add_systems(
                Update,
                (
                    (reset_dash_readiness, start_dash).chain(),
                    update_ground_enemies,
                )
                    .in_set(GameplaySet::Act),
            )
            .add_systems(
                Update,
                (strike_enemies, update_dash)
                    .chain()
                    .in_set(GameplaySet::Physics),
            )
            .add_systems(
                Update,
                (
                    detect_contact_damage,
                    apply_damage,
                    process_deaths,
                    tick_player_death,
                    cleanup_dead_enemies,
                )
                    .chain()
                    .in_set(GameplaySet::Resolve),
            );
    }
}
