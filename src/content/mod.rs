//! Content domain: RON-driven tuning and level definitions.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    LevelDef, PickupDef, PickupKind, RectDef, TriggerAction, TriggerDef, TuningFile,
    builtin_levels,
};
pub use registry::LevelRegistry;

use avian2d::prelude::Gravity;
use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::{load_levels, load_tuning};
use crate::content::validation::validate_levels;

const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load tuning overrides and level definitions, falling back to defaults.
fn load_content(mut commands: Commands) {
    let base = Path::new(DATA_DIR);

    let tuning = match load_tuning(&base.join("tuning.ron")) {
        Ok(tuning) => {
            info!("Loaded tuning overrides from {}", DATA_DIR);
            tuning
        }
        Err(e) => {
            warn!("{}; using default tuning", e);
            TuningFile::default()
        }
    };
    insert_tuning(&mut commands, tuning);

    let levels = match load_levels(&base.join("levels.ron")) {
        Ok(levels) => levels,
        Err(e) => {
            warn!("{}; using built-in levels", e);
            builtin_levels()
        }
    };

    let mut registry = LevelRegistry::from_levels(levels);
    let errors = validate_levels(&registry);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        warn!("Level data failed validation; using built-in levels");
        registry = LevelRegistry::from_levels(builtin_levels());
    }

    info!("LevelRegistry loaded: {} levels", registry.len());
    commands.insert_resource(registry);
}

fn insert_tuning(commands: &mut Commands, tuning: TuningFile) {
    // Enemies fall under engine gravity; the player integrates its own
    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.movement.gravity));
    commands.insert_resource(tuning.movement);
    commands.insert_resource(tuning.grapple);
    commands.insert_resource(tuning.dash);
    commands.insert_resource(tuning.enemy);
    commands.insert_resource(tuning.combat);
    commands.insert_resource(tuning.camera);
    commands.insert_resource(tuning.audio);
}
