//! Core domain: scene lifecycle states.

use bevy::prelude::*;

/// Preload gates creation: nothing gameplay-related runs until every asset
/// is resident and the scene has entered `Playing`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

/// Per-frame ordering of the gameplay loop. Collision handling always runs
/// before input handling; feedback (audio, animation) runs last.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum FrameSet {
    Collisions,
    Input,
    Feedback,
}
