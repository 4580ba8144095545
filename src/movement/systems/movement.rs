//! Movement domain: applying input to the hero's body.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::AudioCue;
use crate::movement::{Hero, HeroBody, JumpPressed, MovementInput, MovementState, MovementTuning};

/// Runs every frame, so releasing all keys stops the hero immediately.
pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LinearVelocity, &mut MovementState), With<Hero>>,
) {
    let direction = input.direction();

    for (mut velocity, mut state) in &mut query {
        HeroBody::new(&mut velocity, &mut state, &tuning).move_horizontally(direction);
    }
}

pub(crate) fn apply_jump(
    mut jumps: MessageReader<JumpPressed>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut LinearVelocity, &mut MovementState), With<Hero>>,
    mut cues: MessageWriter<AudioCue>,
) {
    for _ in jumps.read() {
        for (mut velocity, mut state) in &mut query {
            if HeroBody::new(&mut velocity, &mut state, &tuning).jump() {
                debug!("Jump accepted: vy={}", velocity.y);
                cues.write(AudioCue::Jump);
            } else {
                debug!("Jump rejected: airborne");
            }
        }
    }
}
