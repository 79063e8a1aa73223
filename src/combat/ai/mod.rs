//! Combat domain: enemy AI modules.

pub(crate) mod ground;

pub use ground::{AiDecision, EnemySensors, enemy_ai_step};
