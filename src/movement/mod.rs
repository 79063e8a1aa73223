//! Movement domain: player locomotion with jump buffering and coyote time.

mod bootstrap;
mod components;
mod events;
pub mod kinematics;
mod resources;
mod systems;


pub use bootstrap::spawn_player;
pub use components::{Facing, GameLayer, Ground, MovementState, Player, Wall};
pub use events::Landed;
pub use resources::{MovementInput, MovementTuning, PointerInput};
pub(crate) use systems::apply_gravity;

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, detect_ground, read_input, read_pointer,
    update_facing, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<PointerInput>()
            .add_message::<Landed>()
            .add_systems(
                Update,
                (read_input, read_pointer).in_set(GameplaySet::Input),
            )
            .add_systems(Update, detect_ground.in_set(GameplaySet::Sense))
            .add_systems(
                Update,
                (update_timers, apply_jump).chain().in_set(GameplaySet::Act),
            )
            .add_systems(
                Update,
                (apply_horizontal_movement, apply_gravity, update_facing)
                    .chain()
                    .in_set(GameplaySet::Physics),
            );
    }
}
