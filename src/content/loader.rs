//! Loader for the level JSON and RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::AssetCatalog;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse a RON document into any deserializable type.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse a level description from JSON text.
pub fn parse_level(file: &str, contents: &str) -> Result<LevelData, ContentLoadError> {
    serde_json::from_str(contents).map_err(|e| ContentLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })
}

/// Load a level file (JSON).
pub fn load_level(path: &Path) -> Result<LevelData, ContentLoadError> {
    let contents = read_file(path)?;
    parse_level(&path.display().to_string(), &contents)
}

/// Load the asset catalog (RON) and index it by key.
pub fn load_catalog(path: &Path) -> Result<AssetCatalog, ContentLoadError> {
    let contents = read_file(path)?;
    let file: CatalogFile = parse_ron(&path.display().to_string(), &contents)?;
    Ok(AssetCatalog::from_file(file))
}

/// Load gameplay defaults (single RON struct).
pub fn load_gameplay_defaults(path: &Path) -> Result<GameplayDefaults, ContentLoadError> {
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

/// Everything the preload phase reads from assets/data.
pub struct LoadedContent {
    pub level: LevelData,
    pub catalog: AssetCatalog,
    pub defaults: GameplayDefaults,
}

/// Load the level, catalog and gameplay defaults from `base_path`.
/// The level and catalog are required; missing gameplay defaults fall back
/// to built-in values. Returns every error found.
pub fn load_all_content(
    base_path: &Path,
    level_file: &str,
) -> Result<LoadedContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let level = load_level(&base_path.join(level_file))
        .map_err(|e| errors.push(e))
        .ok();
    let catalog = load_catalog(&base_path.join("catalog.ron"))
        .map_err(|e| errors.push(e))
        .ok();

    let defaults_path = base_path.join("gameplay_defaults.ron");
    let defaults = if defaults_path.exists() {
        load_gameplay_defaults(&defaults_path)
            .map_err(|e| errors.push(e))
            .ok()
    } else {
        bevy::log::warn!(
            "{} not found, using built-in gameplay defaults",
            defaults_path.display()
        );
        Some(GameplayDefaults::default())
    };

    match (level, catalog, defaults) {
        (Some(level), Some(catalog), Some(defaults)) if errors.is_empty() => Ok(LoadedContent {
            level,
            catalog,
            defaults,
        }),
        _ => Err(errors),
    }
}
