//! Pickups domain: overlap messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The hero started overlapping a coin this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinOverlap {
    pub hero: Entity,
    pub coin: Entity,
}

impl Message for CoinOverlap {}
