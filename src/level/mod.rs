//! Level domain: turning level data into live entities.

mod components;
mod layout;
mod spawn;


pub use components::{Coin, CoinGroup, Platform, PlatformGroup};
pub use layout::{BodyPlacement, LevelLayout, PlatformPlacement};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::spawn_level;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_level);
    }
}
