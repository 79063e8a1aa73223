//! Movement domain: locomotion events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted on the frame an entity touches ground after being airborne
#[derive(Debug)]
pub struct Landed {
    pub entity: Entity,
}

impl Message for Landed {}
