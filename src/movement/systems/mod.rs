//! Movement domain: system modules for hero updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{clamp_to_world_bounds, detect_ground};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_horizontal_movement, apply_jump};
