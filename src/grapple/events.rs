//! Grapple domain: hook lifecycle events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A hook left the player toward a valid hit point
#[derive(Debug)]
pub struct GrappleFired {
    pub entity: Entity,
}

impl Message for GrappleFired {}

#[derive(Debug)]
pub struct GrappleAttached {
    pub entity: Entity,
    pub anchor: Vec2,
}

impl Message for GrappleAttached {}

#[derive(Debug)]
pub struct GrappleReleased {
    pub entity: Entity,
    pub velocity: Vec2,
}

impl Message for GrappleReleased {}
