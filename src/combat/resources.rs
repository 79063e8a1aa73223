//! Combat domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatTuning {
    pub player_max_health: f32,
    /// Invulnerability granted to the player after each hit
    pub iframes_duration: f32,
    pub player_death_delay: f32,
    pub enemy_destroy_delay: f32,
    pub hit_shake_duration: f32,
    pub hit_shake_magnitude: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            player_max_health: 100.0,
            iframes_duration: 0.5,
            player_death_delay: 0.3,
            enemy_destroy_delay: 0.5,
            hit_shake_duration: 0.15,
            hit_shake_magnitude: 6.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashTuning {
    pub speed: f32,
    pub duration: f32,
    pub damage_radius: f32,
    pub damage: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self {
            speed: 1000.0,
            duration: 0.15,
            damage_radius: 20.0,
            damage: 50.0,
        }
    }
}

/// Defaults applied to every spawned ground enemy.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub max_health: f32,
    pub contact_damage: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub detection_radius: f32,
    pub ground_sensor_offset: (f32, f32),
    pub ground_sensor_radius: f32,
    pub wall_sensor_distance: f32,
    pub size: (f32, f32),
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            contact_damage: 20.0,
            patrol_speed: 80.0,
            chase_speed: 140.0,
            detection_radius: 200.0,
            ground_sensor_offset: (20.0, -20.0),
            ground_sensor_radius: 4.0,
            wall_sensor_distance: 20.0,
            size: (32.0, 32.0),
        }
    }
}

impl EnemyTuning {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.size.0, self.size.1)
    }

    pub fn ground_sensor_offset(&self) -> Vec2 {
        Vec2::new(self.ground_sensor_offset.0, self.ground_sensor_offset.1)
    }
}
