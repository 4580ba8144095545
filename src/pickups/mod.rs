//! Pickups domain: coin collection.
//!
//! Solid hero/platform collision is resolved by the physics step. Coins are
//! sensors, so the only response to touching one is the pickup below.

mod events;
mod systems;


pub use events::CoinOverlap;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::pickups::systems::{collect_coins, detect_coin_overlaps};

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CoinOverlap>().add_systems(
            Update,
            (detect_coin_overlaps, collect_coins)
                .chain()
                .in_set(FrameSet::Collisions),
        );
    }
}
