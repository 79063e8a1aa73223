//! Validation for cross-references and geometry in level definitions.

use super::data::{LevelDef, RectDef, TriggerAction};
use super::registry::LevelRegistry;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub level_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Level '{}' has invalid '{}': {}",
            self.level_id, self.field, self.problem
        )
    }
}

fn check_rects(
    errors: &mut Vec<ValidationError>,
    level: &LevelDef,
    field: &'static str,
    rects: &[RectDef],
) {
    for rect in rects {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            errors.push(ValidationError {
                level_id: level.id.clone(),
                field,
                problem: format!(
                    "box at ({}, {}) has non-positive size {}x{}",
                    rect.x, rect.y, rect.width, rect.height
                ),
            });
        }
    }
}

/// Validate every level in the registry.
/// Returns a list of validation errors, empty if all levels are valid.
pub fn validate_levels(registry: &LevelRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for id in &registry.order {
        let Some(level) = registry.get(id) else {
            continue;
        };

        check_rects(&mut errors, level, "ground", &level.ground);
        check_rects(&mut errors, level, "walls", &level.walls);
        check_rects(&mut errors, level, "anchors", &level.anchors);

        for trigger in &level.triggers {
            check_rects(
                &mut errors,
                level,
                "triggers",
                std::slice::from_ref(&trigger.area),
            );

            if let TriggerAction::LoadLevel(target) = &trigger.action
                && !registry.contains(target)
            {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "triggers",
                    problem: format!("LoadLevel references missing level '{}'", target),
                });
            }
        }

        for enemy in &level.enemies {
            if let Some(health) = enemy.max_health
                && health <= 0.0
            {
                errors.push(ValidationError {
                    level_id: level.id.clone(),
                    field: "enemies",
                    problem: format!(
                        "enemy at ({}, {}) has max_health {}",
                        enemy.x, enemy.y, health
                    ),
                });
            }
        }
    }

    errors
}
