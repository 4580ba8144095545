//! Level domain: resolving level records into engine-space placements.
//!
//! The layout is computed before anything is spawned so that a bad level is
//! rejected as a whole.

use bevy::prelude::*;

use crate::content::{AssetCatalog, LevelData, LevelDataError, WorldConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPlacement {
    pub image: String,
    /// Top-left corner as written in the level file.
    pub origin: Vec2,
    /// Centre in engine space.
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyPlacement {
    /// Centre as written in the level file.
    pub origin: Vec2,
    /// Centre in engine space.
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub platforms: Vec<PlatformPlacement>,
    pub hero: BodyPlacement,
    pub coins: Vec<BodyPlacement>,
}

impl LevelLayout {
    pub fn build(
        level: &LevelData,
        catalog: &AssetCatalog,
        world: &WorldConfig,
    ) -> Result<Self, LevelDataError> {
        let mut platforms = Vec::with_capacity(level.platforms.len());
        for (index, platform) in level.platforms.iter().enumerate() {
            let image = catalog
                .image(&platform.image)
                .ok_or_else(|| LevelDataError::UnknownImage {
                    index,
                    image: platform.image.clone(),
                })?;
            let size = image.size();
            // Platforms are anchored at their top-left corner
            let center = world.to_world(platform.x + size.x * 0.5, platform.y + size.y * 0.5);
            platforms.push(PlatformPlacement {
                image: platform.image.clone(),
                origin: Vec2::new(platform.x, platform.y),
                center,
                size,
            });
        }

        let hero_image = catalog.image("hero").ok_or(LevelDataError::MissingAsset {
            kind: "image",
            key: "hero",
        })?;
        let hero = BodyPlacement {
            origin: Vec2::new(level.hero.x, level.hero.y),
            center: world.to_world(level.hero.x, level.hero.y),
            size: hero_image.size(),
        };

        let coin_sheet = catalog
            .sprite_sheet("coin")
            .ok_or(LevelDataError::MissingAsset {
                kind: "sprite sheet",
                key: "coin",
            })?;
        let coins = level
            .coins
            .iter()
            .map(|coin| BodyPlacement {
                origin: Vec2::new(coin.x, coin.y),
                center: world.to_world(coin.x, coin.y),
                size: coin_sheet.frame_size(),
            })
            .collect();

        Ok(Self {
            platforms,
            hero,
            coins,
        })
    }
}
