//! Debug overlay for fast iteration (dev-tools feature).
//!
//! F1 (or backtick) toggles a panel with the hero's level-space position,
//! velocity, grounded flag and the number of coins left. F2 toggles collider
//! outlines.

mod systems;


use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    hide_physics_gizmos, toggle_debug_info, toggle_physics_gizmos, update_debug_info_overlay,
};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsDebugPlugin)
            .init_resource::<DebugState>()
            .add_systems(Startup, hide_physics_gizmos)
            .add_systems(
                Update,
                (
                    toggle_debug_info,
                    toggle_physics_gizmos,
                    update_debug_info_overlay,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
