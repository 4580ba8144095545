//! Movement domain: components and physics layers for the hero.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static level geometry the hero stands on
    Ground,
    /// The player-controlled hero
    Hero,
    /// Overlap-only pickups (coins)
    Pickup,
}

/// Marker for the player-controlled hero.
#[derive(Component, Debug)]
pub struct Hero;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    /// Resting on a ground surface this frame. Gates jumping.
    pub on_ground: bool,
}
