//! Preload: queue every catalog asset on the AssetServer and gate the scene
//! on their completion.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::collections::HashMap;

use super::registry::AssetCatalog;
use crate::core::GameState;

/// Handles for every loaded asset, keyed by catalog key.
#[derive(Resource, Debug, Default, Clone)]
pub struct SceneAssets {
    pub images: HashMap<String, Handle<Image>>,
    pub sheets: HashMap<String, SheetHandles>,
    pub sounds: HashMap<String, Handle<AudioSource>>,
}

#[derive(Debug, Default, Clone)]
pub struct SheetHandles {
    pub image: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
}

impl SceneAssets {
    /// Image handle for `key`, or the default handle when unregistered.
    pub fn image(&self, key: &str) -> Handle<Image> {
        self.images.get(key).cloned().unwrap_or_default()
    }

    pub fn sheet(&self, key: &str) -> SheetHandles {
        self.sheets.get(key).cloned().unwrap_or_default()
    }

    pub fn sound(&self, key: &str) -> Option<Handle<AudioSource>> {
        self.sounds.get(key).cloned()
    }

    /// Ids of every asset that comes from disk.
    fn pending_ids(&self) -> Vec<UntypedAssetId> {
        self.images
            .values()
            .map(|h| h.id().untyped())
            .chain(self.sheets.values().map(|s| s.image.id().untyped()))
            .chain(self.sounds.values().map(|h| h.id().untyped()))
            .collect()
    }
}

pub fn queue_scene_assets(
    mut commands: Commands,
    catalog: Option<Res<AssetCatalog>>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let Some(catalog) = catalog else {
        return;
    };

    let mut assets = SceneAssets::default();
    for (key, image) in &catalog.images {
        assets
            .images
            .insert(key.clone(), asset_server.load(image.path.clone()));
    }
    for (key, sheet) in &catalog.sprite_sheets {
        let layout = TextureAtlasLayout::from_grid(
            UVec2::new(sheet.frame_width, sheet.frame_height),
            sheet.columns,
            sheet.rows,
            None,
            None,
        );
        assets.sheets.insert(
            key.clone(),
            SheetHandles {
                image: asset_server.load(sheet.path.clone()),
                layout: layouts.add(layout),
            },
        );
    }
    for (key, sound) in &catalog.sounds {
        assets
            .sounds
            .insert(key.clone(), asset_server.load(sound.path.clone()));
    }

    debug!(
        "Queued {} images, {} sheets, {} sounds",
        assets.images.len(),
        assets.sheets.len(),
        assets.sounds.len()
    );
    commands.insert_resource(assets);
}

/// Move to `GameState::Playing` once every queued asset is resident.
pub fn check_scene_assets_loaded(
    assets: Option<Res<SceneAssets>>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(assets) = assets else {
        return;
    };

    let ids = assets.pending_ids();
    for id in &ids {
        if let LoadState::Failed(err) = asset_server.load_state(*id) {
            error!("Asset failed to load: {}", err);
            exit.write(AppExit::error());
            return;
        }
    }

    if ids
        .iter()
        .all(|id| asset_server.is_loaded_with_dependencies(*id))
    {
        info!("All {} assets loaded", ids.len());
        next_state.set(GameState::Playing);
    }
}
