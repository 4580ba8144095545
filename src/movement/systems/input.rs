//! Movement domain: keyboard sampling.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{JumpPressed, KeyBindings, MovementInput};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<MovementInput>,
    mut jumps: MessageWriter<JumpPressed>,
) {
    input.left_held = keyboard.pressed(bindings.left);
    input.right_held = keyboard.pressed(bindings.right);

    // Edge-triggered: one message per press, not per held frame
    if keyboard.just_pressed(bindings.jump) {
        jumps.write(JumpPressed);
    }
}
