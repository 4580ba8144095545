//! Validation of level data against the asset catalog and world bounds.

use super::data::*;
use super::registry::AssetCatalog;

/// Image keys the scene uses directly, independent of the level file.
pub const REQUIRED_IMAGES: [&str; 2] = ["background", "hero"];
pub const REQUIRED_SPRITE_SHEETS: [&str; 1] = ["coin"];
pub const REQUIRED_SOUNDS: [&str; 2] = ["sfx:jump", "sfx:coin"];

/// Which kind of level record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Platform,
    Coin,
    Hero,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Platform => write!(f, "platform"),
            RecordKind::Coin => write!(f, "coin"),
            RecordKind::Hero => write!(f, "hero"),
        }
    }
}

/// A problem with the level description that prevents the scene from starting.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelDataError {
    /// A platform names an image that is not in the catalog.
    UnknownImage { index: usize, image: String },
    /// A coordinate is NaN or infinite.
    NonFinite { kind: RecordKind, index: usize },
    /// A record lies outside the playable area.
    OutOfBounds {
        kind: RecordKind,
        index: usize,
        x: f32,
        y: f32,
    },
    /// An asset the scene always needs is not registered.
    MissingAsset {
        kind: &'static str,
        key: &'static str,
    },
    /// An animation frame indexes past the end of its sprite sheet.
    FrameOutOfRange {
        animation: String,
        frame: usize,
        frame_count: usize,
    },
}

impl std::fmt::Display for LevelDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelDataError::UnknownImage { index, image } => {
                write!(f, "platform {} references unknown image '{}'", index, image)
            }
            LevelDataError::NonFinite { kind, index } => {
                write!(f, "{} {} has a non-finite coordinate", kind, index)
            }
            LevelDataError::OutOfBounds { kind, index, x, y } => {
                write!(f, "{} {} at ({}, {}) is outside the world", kind, index, x, y)
            }
            LevelDataError::MissingAsset { kind, key } => {
                write!(f, "required {} '{}' is not registered", kind, key)
            }
            LevelDataError::FrameOutOfRange {
                animation,
                frame,
                frame_count,
            } => write!(
                f,
                "animation '{}' uses frame {} but the sheet has {} frames",
                animation, frame, frame_count
            ),
        }
    }
}

impl std::error::Error for LevelDataError {}

fn check_point(
    errors: &mut Vec<LevelDataError>,
    world: &WorldConfig,
    kind: RecordKind,
    index: usize,
    x: f32,
    y: f32,
) {
    if !x.is_finite() || !y.is_finite() {
        errors.push(LevelDataError::NonFinite { kind, index });
    } else if !world.contains(x, y) {
        errors.push(LevelDataError::OutOfBounds { kind, index, x, y });
    }
}

/// Validate the level and the catalog entries the scene depends on.
/// Returns a list of errors, empty if the level can be built.
pub fn validate_level(
    level: &LevelData,
    catalog: &AssetCatalog,
    world: &WorldConfig,
) -> Vec<LevelDataError> {
    let mut errors = Vec::new();

    for key in REQUIRED_IMAGES {
        if catalog.image(key).is_none() {
            errors.push(LevelDataError::MissingAsset { kind: "image", key });
        }
    }
    for key in REQUIRED_SPRITE_SHEETS {
        if catalog.sprite_sheet(key).is_none() {
            errors.push(LevelDataError::MissingAsset {
                kind: "sprite sheet",
                key,
            });
        }
    }
    for key in REQUIRED_SOUNDS {
        if catalog.sound(key).is_none() {
            errors.push(LevelDataError::MissingAsset { kind: "sound", key });
        }
    }

    for (index, platform) in level.platforms.iter().enumerate() {
        if catalog.image(&platform.image).is_none() {
            errors.push(LevelDataError::UnknownImage {
                index,
                image: platform.image.clone(),
            });
        }
        check_point(
            &mut errors,
            world,
            RecordKind::Platform,
            index,
            platform.x,
            platform.y,
        );
    }

    for (index, coin) in level.coins.iter().enumerate() {
        check_point(&mut errors, world, RecordKind::Coin, index, coin.x, coin.y);
    }

    check_point(
        &mut errors,
        world,
        RecordKind::Hero,
        0,
        level.hero.x,
        level.hero.y,
    );

    errors
}

/// Check that every frame of `animation` exists on the sprite sheet `sheet_key`.
/// A missing sheet is reported by `validate_level`, not here.
pub fn validate_animation(
    animation: &AnimationDef,
    sheet_key: &str,
    catalog: &AssetCatalog,
) -> Vec<LevelDataError> {
    let Some(sheet) = catalog.sprite_sheet(sheet_key) else {
        return Vec::new();
    };
    let frame_count = sheet.frame_count();

    animation
        .frames
        .iter()
        .filter(|&&frame| frame >= frame_count)
        .map(|&frame| LevelDataError::FrameOutOfRange {
            animation: animation.name.clone(),
            frame,
            frame_count,
        })
        .collect()
}
