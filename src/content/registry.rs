//! AssetCatalog resource providing key lookups for every registered asset.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Registry of image, sprite sheet and sound keys.
/// A key must be registered here before a level or a system may use it.
#[derive(Resource, Debug, Default, Clone)]
pub struct AssetCatalog {
    pub images: HashMap<String, ImageDef>,
    pub sprite_sheets: HashMap<String, SpriteSheetDef>,
    pub sounds: HashMap<String, SoundDef>,
}

impl AssetCatalog {
    pub fn from_file(file: CatalogFile) -> Self {
        let mut catalog = Self::default();
        for image in file.images {
            catalog.images.insert(image.key.clone(), image);
        }
        for sheet in file.sprite_sheets {
            catalog.sprite_sheets.insert(sheet.key.clone(), sheet);
        }
        for sound in file.sounds {
            catalog.sounds.insert(sound.key.clone(), sound);
        }
        catalog
    }

    pub fn image(&self, key: &str) -> Option<&ImageDef> {
        self.images.get(key)
    }

    pub fn sprite_sheet(&self, key: &str) -> Option<&SpriteSheetDef> {
        self.sprite_sheets.get(key)
    }

    pub fn sound(&self, key: &str) -> Option<&SoundDef> {
        self.sounds.get(key)
    }

    /// Returns a summary of registered asset counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "AssetCatalog loaded: {} images, {} sprite sheets, {} sounds",
            self.images.len(),
            self.sprite_sheets.len(),
            self.sounds.len()
        )
    }
}
