//! Data definitions for the level file and the RON content files.
//!
//! These structs mirror the structure of assets/data/* and are used for
//! deserialization only. Level coordinates are screen pixels: origin at the
//! top-left of the play surface, y pointing down.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;

// ============================================================================
// Level (level01.json)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LevelData {
    pub platforms: Vec<PlatformDef>,
    pub coins: Vec<CoinDef>,
    pub hero: HeroSpawnDef,
}

/// A platform is placed by its top-left corner.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub image: String,
}

/// Coins are placed by their centre.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct CoinDef {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct HeroSpawnDef {
    pub x: f32,
    pub y: f32,
}

// ============================================================================
// Asset catalog (catalog.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogFile {
    pub schema_version: u32,
    pub images: Vec<ImageDef>,
    #[serde(default)]
    pub sprite_sheets: Vec<SpriteSheetDef>,
    #[serde(default)]
    pub sounds: Vec<SoundDef>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ImageDef {
    pub key: String,
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDef {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// An image cut into a grid of equally sized frames.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SpriteSheetDef {
    pub key: String,
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SpriteSheetDef {
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.frame_width as f32, self.frame_height as f32)
    }

    pub fn frame_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SoundDef {
    pub key: String,
    pub path: String,
}

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameplayDefaults {
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default = "AnimationDef::coin_rotate")]
    pub coin_animation: AnimationDef,
}

/// Size of the playable area in pixels.
#[derive(Resource, Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
        }
    }
}

impl WorldConfig {
    /// Convert a level-space point (top-left origin, y down) into engine
    /// space (centre origin, y up).
    pub fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x - self.width * 0.5, self.height * 0.5 - y)
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// A named frame sequence played over a sprite sheet.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AnimationDef {
    pub name: String,
    pub frames: Vec<usize>,
    pub fps: f32,
    pub looping: bool,
}

impl Default for AnimationDef {
    fn default() -> Self {
        Self::coin_rotate()
    }
}

impl AnimationDef {
    pub fn coin_rotate() -> Self {
        Self {
            name: "rotate".to_string(),
            frames: vec![0, 1, 2, 1],
            fps: 6.0,
            looping: true,
        }
    }
}
