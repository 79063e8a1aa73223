//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The LevelRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::audio::AudioSettings;
use crate::camera::CameraTuning;
use crate::combat::{CombatTuning, DashTuning, EnemyTuning};
use crate::grapple::GrappleTuning;
use crate::movement::MovementTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Tuning (tuning.ron)
// ============================================================================

/// Every section falls back to its compiled-in default when omitted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningFile {
    pub movement: MovementTuning,
    pub grapple: GrappleTuning,
    pub dash: DashTuning,
    pub enemy: EnemyTuning,
    pub combat: CombatTuning,
    pub camera: CameraTuning,
    pub audio: AudioSettings,
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Axis-aligned box given by its center and size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectDef {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub player_spawn: (f32, f32),
    #[serde(default)]
    pub ground: Vec<RectDef>,
    #[serde(default)]
    pub walls: Vec<RectDef>,
    /// Hookable blocks that are neither floor nor wall
    #[serde(default)]
    pub anchors: Vec<RectDef>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawnDef>,
    #[serde(default)]
    pub pickups: Vec<PickupDef>,
    #[serde(default)]
    pub triggers: Vec<TriggerDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemySpawnDef {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_true")]
    pub facing_right: bool,
    /// Overrides the enemy tuning's max health
    #[serde(default)]
    pub max_health: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PickupKind {
    DoubleJump,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickupDef {
    pub x: f32,
    pub y: f32,
    pub kind: PickupKind,
    #[serde(default = "default_pickup_label")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum TriggerAction {
    /// Switch to another level by id
    LoadLevel(String),
    /// Finish the game and show the end screen
    EndGame,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TriggerDef {
    pub area: RectDef,
    pub action: TriggerAction,
}

fn default_true() -> bool {
    true
}

fn default_pickup_label() -> String {
    "Extra Jump".to_string()
}

/// Levels used when levels.ron is missing or unreadable.
pub fn builtin_levels() -> Vec<LevelDef> {
    vec![
        LevelDef {
            id: "level_1".to_string(),
            name: "Outskirts".to_string(),
            player_spawn: (-500.0, -100.0),
            ground: vec![
                RectDef::new(-300.0, -200.0, 700.0, 40.0),
                RectDef::new(650.0, -200.0, 500.0, 40.0),
                RectDef::new(250.0, -60.0, 120.0, 20.0),
            ],
            walls: vec![
                RectDef::new(-670.0, 50.0, 40.0, 540.0),
                RectDef::new(920.0, 50.0, 40.0, 540.0),
            ],
            anchors: vec![RectDef::new(225.0, 220.0, 80.0, 30.0)],
            enemies: vec![EnemySpawnDef {
                x: 600.0,
                y: -160.0,
                facing_right: false,
                max_health: None,
            }],
            pickups: vec![PickupDef {
                x: 250.0,
                y: -20.0,
                kind: PickupKind::DoubleJump,
                label: default_pickup_label(),
            }],
            triggers: vec![TriggerDef {
                area: RectDef::new(850.0, -140.0, 60.0, 80.0),
                action: TriggerAction::LoadLevel("level_2".to_string()),
            }],
        },
        LevelDef {
            id: "level_2".to_string(),
            name: "The Chasm".to_string(),
            player_spawn: (-550.0, -100.0),
            ground: vec![
                RectDef::new(-500.0, -200.0, 300.0, 40.0),
                RectDef::new(550.0, -200.0, 400.0, 40.0),
            ],
            walls: vec![
                RectDef::new(-670.0, 50.0, 40.0, 540.0),
                RectDef::new(770.0, 50.0, 40.0, 540.0),
            ],
            anchors: vec![
                RectDef::new(-120.0, 200.0, 80.0, 30.0),
                RectDef::new(180.0, 220.0, 80.0, 30.0),
            ],
            enemies: vec![
                EnemySpawnDef {
                    x: 450.0,
                    y: -160.0,
                    facing_right: true,
                    max_health: None,
                },
                EnemySpawnDef {
                    x: 600.0,
                    y: -160.0,
                    facing_right: false,
                    max_health: Some(150.0),
                },
            ],
            pickups: Vec::new(),
            triggers: vec![TriggerDef {
                area: RectDef::new(700.0, -140.0, 60.0, 80.0),
                action: TriggerAction::EndGame,
            }],
        },
    ]
}
