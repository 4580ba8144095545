//! Movement domain: tuning, key bindings and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed in pixels per second.
    pub speed: f32,
    /// Upward take-off speed in pixels per second.
    pub jump_speed: f32,
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    /// How far below the hero's feet ground is still detected.
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            jump_speed: 600.0,
            gravity: 1200.0,
            ground_probe_distance: 4.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a jump from rest: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            jump: KeyCode::ArrowUp,
        }
    }
}

/// Held-key snapshot, rewritten every frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub left_held: bool,
    pub right_held: bool,
}

impl MovementInput {
    /// Left wins when both directions are held.
    pub fn direction(&self) -> f32 {
        if self.left_held {
            -1.0
        } else if self.right_held {
            1.0
        } else {
            0.0
        }
    }
}
