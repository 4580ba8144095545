//! Sprites module for sprite sheet animation.

pub mod animation;


use bevy::prelude::*;

pub use animation::*;

use crate::core::FrameSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_animation_frames.in_set(FrameSet::Feedback));
    }
}
