//! Core domain: window, scene lifecycle and frame ordering.

mod state;
mod systems;

pub use state::{FrameSet, GameState};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, spawn_background};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .configure_sets(
                Update,
                (FrameSet::Collisions, FrameSet::Input, FrameSet::Feedback)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), spawn_background);
    }
}
