//! Movement domain: input messages.

use bevy::ecs::message::Message;

/// Emitted once per press-down transition of the jump key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPressed;

impl Message for JumpPressed {}
