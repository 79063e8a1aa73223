//! LevelRegistry resource providing lookups for loaded level definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::LevelDef;

/// All loaded levels, keyed by id. `order` keeps file order so the first
/// entry is where a new game starts.
#[derive(Resource, Debug, Default)]
pub struct LevelRegistry {
    pub levels: HashMap<String, LevelDef>,
    pub order: Vec<String>,
}

impl LevelRegistry {
    pub fn from_levels(levels: Vec<LevelDef>) -> Self {
        let mut registry = Self::default();
        for level in levels {
            if registry.levels.contains_key(&level.id) {
                warn!("Duplicate level id '{}', keeping the first", level.id);
                continue;
            }
            registry.order.push(level.id.clone());
            registry.levels.insert(level.id.clone(), level);
        }
        registry
    }

    pub fn get(&self, id: &str) -> Option<&LevelDef> {
        self.levels.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.levels.contains_key(id)
    }

    pub fn first_level_id(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
