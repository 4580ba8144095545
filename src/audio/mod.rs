//! Audio domain: sound registry and cue playback.
//!
//! Gameplay systems never touch audio handles. They write an `AudioCue`
//! message and the dispatcher turns each one into a one-shot sound entity.

#[cfg(test)]
mod tests;

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::SceneAssets;
use crate::core::{FrameSet, GameState};

/// Gameplay events that have a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Jump,
    Coin,
}

impl AudioCue {
    pub const ALL: [AudioCue; 2] = [AudioCue::Jump, AudioCue::Coin];

    /// Catalog key of the sound played for this cue.
    pub fn sound_key(self) -> &'static str {
        match self {
            AudioCue::Jump => "sfx:jump",
            AudioCue::Coin => "sfx:coin",
        }
    }
}

impl Message for AudioCue {}

/// Cue to sound mapping, built once when the scene is created.
#[derive(Resource, Debug, Default)]
pub struct SoundRegistry {
    sounds: HashMap<AudioCue, Handle<AudioSource>>,
}

impl SoundRegistry {
    pub fn from_assets(assets: &SceneAssets) -> Self {
        let mut sounds = HashMap::new();
        for cue in AudioCue::ALL {
            match assets.sound(cue.sound_key()) {
                Some(handle) => {
                    sounds.insert(cue, handle);
                }
                None => warn!("No sound registered for {:?} ('{}')", cue, cue.sound_key()),
            }
        }
        Self { sounds }
    }

    pub fn get(&self, cue: AudioCue) -> Option<&Handle<AudioSource>> {
        self.sounds.get(&cue)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }
}

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AudioCue>()
            .add_systems(OnEnter(GameState::Playing), setup_sound_registry)
            .add_systems(Update, play_audio_cues.in_set(FrameSet::Feedback));
    }
}

pub(crate) fn setup_sound_registry(mut commands: Commands, assets: Res<SceneAssets>) {
    let registry = SoundRegistry::from_assets(&assets);
    info!("Sound registry ready: {} cues", registry.len());
    commands.insert_resource(registry);
}

pub(crate) fn play_audio_cues(
    mut commands: Commands,
    mut cues: MessageReader<AudioCue>,
    registry: Res<SoundRegistry>,
) {
    for cue in cues.read() {
        let Some(handle) = registry.get(*cue) else {
            continue;
        };
        commands.spawn((
            Name::new(cue.sound_key()),
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
