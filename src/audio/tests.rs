//! Audio domain: tests for cue mapping and dispatch.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::*;

fn assets_with_sounds(keys: &[&str]) -> SceneAssets {
    let mut assets = SceneAssets::default();
    for key in keys {
        assets
            .sounds
            .insert(key.to_string(), Handle::<AudioSource>::default());
    }
    assets
}

#[test]
fn test_cue_sound_keys() {
    assert_eq!(AudioCue::Jump.sound_key(), "sfx:jump");
    assert_eq!(AudioCue::Coin.sound_key(), "sfx:coin");
}

#[test]
fn test_registry_maps_every_cue() {
    let registry = SoundRegistry::from_assets(&assets_with_sounds(&["sfx:jump", "sfx:coin"]));
    assert_eq!(registry.len(), 2);
    assert!(registry.get(AudioCue::Jump).is_some());
    assert!(registry.get(AudioCue::Coin).is_some());
}

#[test]
fn test_registry_skips_unregistered_sounds() {
    let registry = SoundRegistry::from_assets(&assets_with_sounds(&["sfx:coin"]));
    assert_eq!(registry.len(), 1);
    assert!(registry.get(AudioCue::Jump).is_none());
}

#[test]
fn test_each_cue_spawns_one_sound() {
    let mut world = World::new();
    world.insert_resource(SoundRegistry::from_assets(&assets_with_sounds(&[
        "sfx:jump", "sfx:coin",
    ])));
    world.init_resource::<Messages<AudioCue>>();

    world.write_message(AudioCue::Jump);
    world.write_message(AudioCue::Coin);
    world.write_message(AudioCue::Coin);
    world.run_system_once(play_audio_cues).unwrap();

    let names: Vec<String> = world
        .query_filtered::<&Name, With<AudioPlayer>>()
        .iter(&world)
        .map(|name| name.as_str().to_string())
        .collect();
    assert_eq!(names.len(), 3);
    assert_eq!(names.iter().filter(|n| *n == "sfx:coin").count(), 2);
    assert_eq!(names.iter().filter(|n| *n == "sfx:jump").count(), 1);
}

#[test]
fn test_cue_without_sound_is_ignored() {
    let mut world = World::new();
    world.insert_resource(SoundRegistry::default());
    world.init_resource::<Messages<AudioCue>>();

    world.write_message(AudioCue::Jump);
    world.run_system_once(play_audio_cues).unwrap();

    assert_eq!(
        world
            .query_filtered::<Entity, With<AudioPlayer>>()
            .iter(&world)
            .count(),
        0
    );
}
