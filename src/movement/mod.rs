//! Movement domain: hero body, input mapping and ground detection.

mod components;
mod events;
mod hero;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Hero, MovementState};
pub use events::JumpPressed;
pub use hero::HeroBody;
pub use resources::{KeyBindings, MovementInput, MovementTuning};
pub use systems::collisions::{BlockedEdges, clamp_to_bounds};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump, clamp_to_world_bounds, detect_ground, read_input,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<KeyBindings>()
            .add_message::<JumpPressed>()
            .add_systems(
                Update,
                (clamp_to_world_bounds, detect_ground)
                    .chain()
                    .in_set(FrameSet::Collisions),
            )
            .add_systems(
                Update,
                (read_input, apply_horizontal_movement, apply_jump)
                    .chain()
                    .in_set(FrameSet::Input),
            );
    }
}
