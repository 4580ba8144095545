//! Level domain: group roots and entity markers.

use bevy::prelude::*;

/// Root entity of the platform group
#[derive(Component, Debug)]
pub struct PlatformGroup;

/// Root entity of the coin group
#[derive(Component, Debug)]
pub struct CoinGroup;

/// Static level geometry built from one platform record
#[derive(Component, Debug)]
pub struct Platform {
    pub image: String,
}

/// Overlap-only pickup built from one coin record
#[derive(Component, Debug)]
pub struct Coin;
