//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.max - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }
}

/// Invulnerability frames - entity cannot take damage
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Damage dealt to the player on touching this entity
#[derive(Component, Debug, Clone, Copy)]
pub struct ContactDamage {
    pub amount: f32,
}

/// Entity has died and is waiting to be cleaned up. Takes no further damage.
#[derive(Component, Debug)]
pub struct Dying;

/// Seconds until a dead player is removed and the end screen is shown
#[derive(Component, Debug)]
pub struct DeathTimer(pub f32);

/// Seconds until a dead enemy's body is removed
#[derive(Component, Debug)]
pub struct DespawnTimer(pub f32);

/// Patrol-and-chase brain for enemies that walk along platforms.
#[derive(Component, Debug, Clone)]
pub struct GroundEnemyAi {
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub detection_radius: f32,
    /// Ground sensor position relative to the body; x is mirrored by direction
    pub ground_sensor_offset: Vec2,
    pub ground_sensor_radius: f32,
    /// Ray length from the body center along the walking direction
    pub wall_sensor_distance: f32,
    pub facing_right: bool,
    pub chasing: bool,
    pub player_alive: bool,
}

impl GroundEnemyAi {
    pub fn facing_sign(&self) -> f32 {
        if self.facing_right { 1.0 } else { -1.0 }
    }

    /// Where the ground sensor sits for a given walking direction.
    pub fn ground_sensor_position(&self, position: Vec2, direction: f32) -> Vec2 {
        position
            + Vec2::new(
                self.ground_sensor_offset.x * direction,
                self.ground_sensor_offset.y,
            )
    }
}

/// Dash attack bookkeeping. A dash is active while `remaining > 0`.
#[derive(Component, Debug)]
pub struct DashState {
    pub ready: bool,
    pub remaining: f32,
    pub direction: Vec2,
    /// Enemies already struck by the current dash
    pub hit: Vec<Entity>,
}

impl Default for DashState {
    fn default() -> Self {
        Self {
            ready: true,
            remaining: 0.0,
            direction: Vec2::X,
            hit: Vec::new(),
        }
    }
}

impl DashState {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn start(&mut self, direction: Vec2, duration: f32) {
        self.ready = false;
        self.remaining = duration;
        self.direction = direction;
        self.hit.clear();
    }

    /// Record a hit. Returns false if this dash already struck `target`.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if self.hit.contains(&target) {
            return false;
        }
        self.hit.push(target);
        true
    }
}
