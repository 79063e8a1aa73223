//! Core domain: events for session flow.

use bevy::ecs::message::Message;

/// Start a fresh session from the first level
#[derive(Debug)]
pub struct StartGameRequested;

impl Message for StartGameRequested {}

/// Show the end screen and freeze gameplay
#[derive(Debug)]
pub struct EndGameRequested;

impl Message for EndGameRequested {}

/// Reload the level currently being played
#[derive(Debug)]
pub struct RestartLevelRequested;

impl Message for RestartLevelRequested {}

#[derive(Debug)]
pub struct QuitToMenuRequested;

impl Message for QuitToMenuRequested {}
