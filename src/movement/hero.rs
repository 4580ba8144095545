//! Movement domain: the hero's command surface over its physics body.

use avian2d::prelude::*;

use crate::movement::{MovementState, MovementTuning};

/// Borrowed view over the hero's body. The rest of the game drives the hero
/// only through `move_horizontally` and `jump`.
pub struct HeroBody<'a> {
    velocity: &'a mut LinearVelocity,
    state: &'a mut MovementState,
    tuning: &'a MovementTuning,
}

impl<'a> HeroBody<'a> {
    pub fn new(
        velocity: &'a mut LinearVelocity,
        state: &'a mut MovementState,
        tuning: &'a MovementTuning,
    ) -> Self {
        Self {
            velocity,
            state,
            tuning,
        }
    }

    /// Set horizontal velocity to `direction * speed`.
    pub fn move_horizontally(&mut self, direction: f32) {
        self.velocity.x = direction * self.tuning.speed;
    }

    /// Take off if grounded. Returns false, leaving velocity untouched, when
    /// airborne.
    pub fn jump(&mut self) -> bool {
        if !self.state.on_ground {
            return false;
        }

        self.velocity.y = self.tuning.jump_speed;
        // Leaving the ground is immediate; the next probe re-evaluates it.
        self.state.on_ground = false;
        true
    }
}
