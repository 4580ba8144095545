//! Frame-sequence playback over sprite sheet atlases.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::AnimationDef;

/// Component for animation playback on an atlas sprite.
#[derive(Component, Debug, Clone)]
pub struct SpriteAnimation {
    /// Animation name (e.g. "rotate").
    pub name: String,
    /// Atlas indices, played in order.
    pub frames: Vec<usize>,
    /// Position in `frames`.
    pub cursor: usize,
    /// Whether playback wraps to the first frame.
    pub looping: bool,
    /// Whether a non-looping animation has reached its last frame.
    pub finished: bool,
    timer: Timer,
}

impl SpriteAnimation {
    /// Create a playing animation from its definition.
    pub fn from_def(def: &AnimationDef) -> Self {
        let frame_time = if def.fps > 0.0 { 1.0 / def.fps } else { 0.0 };
        Self {
            name: def.name.clone(),
            frames: def.frames.clone(),
            cursor: 0,
            looping: def.looping,
            finished: def.frames.len() < 2,
            timer: Timer::from_seconds(frame_time, TimerMode::Repeating),
        }
    }

    /// Atlas index for the current frame.
    pub fn current_frame(&self) -> usize {
        self.frames.get(self.cursor).copied().unwrap_or(0)
    }

    pub fn frame_duration(&self) -> Duration {
        self.timer.duration()
    }

    /// Advance by `delta`. Returns the new atlas index if the frame changed.
    pub fn tick(&mut self, delta: Duration) -> Option<usize> {
        if self.finished || self.timer.duration().is_zero() {
            return None;
        }

        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick() as usize;
        if steps == 0 {
            return None;
        }

        let len = self.frames.len();
        let before = self.cursor;
        if self.looping {
            self.cursor = (self.cursor + steps) % len;
        } else {
            self.cursor = (self.cursor + steps).min(len - 1);
            self.finished = self.cursor == len - 1;
        }

        (self.cursor != before || steps >= len).then(|| self.current_frame())
    }
}

/// System that advances every animation and writes the frame to its atlas.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(&mut SpriteAnimation, &mut Sprite)>,
) {
    for (mut animation, mut sprite) in &mut query {
        let Some(index) = animation.tick(time.delta()) else {
            continue;
        };
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = index;
        }
    }
}
