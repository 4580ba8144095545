//! Core domain: camera and backdrop setup.

use bevy::prelude::*;

use crate::content::SceneAssets;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Backdrop image covering the whole play surface, drawn behind everything.
pub(crate) fn spawn_background(mut commands: Commands, assets: Res<SceneAssets>) {
    commands.spawn((
        Name::new("Background"),
        Sprite::from_image(assets.image("background")),
        Transform::from_xyz(0.0, 0.0, -10.0),
    ));
}
