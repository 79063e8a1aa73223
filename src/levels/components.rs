//! Levels domain: level bookkeeping, trigger zones and pickups.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::content::TriggerAction;

/// Everything spawned for a level; cleared when the level changes.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Hookable block that is neither floor nor wall
#[derive(Component, Debug)]
pub struct Grappleable;

/// Sensor zone acting on player contact
#[derive(Component, Debug, Clone)]
pub struct LevelTrigger {
    pub action: TriggerAction,
}

/// Pickup that grants the double jump
#[derive(Component, Debug)]
pub struct DoubleJumpPickup {
    /// World-space text naming the pickup
    pub label: Option<Entity>,
}

#[derive(Component, Debug)]
pub struct PickupLabel;

#[derive(Resource, Debug, Default)]
pub struct CurrentLevel {
    pub id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoadLevelRequested {
    pub id: String,
}

impl Message for LoadLevelRequested {}
