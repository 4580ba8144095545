//! Content domain: level data, asset catalog and gameplay defaults.
//!
//! Everything under assets/data is read once during the preload phase. A
//! level or catalog that fails to load or validate stops the app before any
//! entity is built.

mod assets;
mod data;
mod loader;
mod registry;
mod validation;


pub use assets::{SceneAssets, check_scene_assets_loaded, queue_scene_assets};
pub use data::*;
pub use loader::{ContentLoadError, LoadedContent, load_all_content, parse_level, parse_ron};
pub use registry::AssetCatalog;
pub use validation::{LevelDataError, RecordKind, validate_animation, validate_level};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::core::GameState;
use crate::movement::MovementTuning;

/// Where the preload phase looks for data files.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
    pub level_file: String,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets/data"),
            level_file: "level01.json".to_string(),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(Startup, (load_content, queue_scene_assets).chain())
            .add_systems(
                Update,
                check_scene_assets_loaded.run_if(in_state(GameState::Loading)),
            );
    }
}

/// Load and validate all data files, then publish them as resources.
pub(crate) fn load_content(
    mut commands: Commands,
    paths: Res<ContentPaths>,
    mut exit: MessageWriter<AppExit>,
) {
    let content = match load_all_content(&paths.data_dir, &paths.level_file) {
        Ok(content) => content,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!("Content failed to load ({} errors), aborting", errors.len());
            exit.write(AppExit::error());
            return;
        }
    };

    let mut problems = validate_level(&content.level, &content.catalog, &content.defaults.world);
    problems.extend(validate_animation(
        &content.defaults.coin_animation,
        "coin",
        &content.catalog,
    ));
    if !problems.is_empty() {
        for problem in &problems {
            error!("Level '{}': {}", paths.level_file, problem);
        }
        error!(
            "Level '{}' is invalid ({} problems), aborting",
            paths.level_file,
            problems.len()
        );
        exit.write(AppExit::error());
        return;
    }

    info!("{}", content.catalog.summary());
    info!(
        "Level '{}' loaded: {} platforms, {} coins, hero at ({}, {})",
        paths.level_file,
        content.level.platforms.len(),
        content.level.coins.len(),
        content.level.hero.x,
        content.level.hero.y
    );

    let LoadedContent {
        level,
        catalog,
        defaults,
    } = content;

    commands.insert_resource::<MovementTuning>(defaults.movement.clone());
    commands.insert_resource(defaults.world);
    commands.insert_resource(defaults);
    commands.insert_resource(catalog);
    commands.insert_resource(level);
}
