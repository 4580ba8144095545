//! Pickups domain: hero/coin overlap detection and coin collection.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::audio::AudioCue;
use crate::level::Coin;
use crate::movement::Hero;
use crate::pickups::CoinOverlap;

/// Translate sensor collision starts between the hero and a coin into
/// `CoinOverlap` messages.
pub(crate) fn detect_coin_overlaps(
    mut collision_events: MessageReader<CollisionStart>,
    hero_query: Query<(), With<Hero>>,
    coin_query: Query<(), With<Coin>>,
    mut overlaps: MessageWriter<CoinOverlap>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hero, coin) in pairs {
            if hero_query.contains(hero) && coin_query.contains(coin) {
                overlaps.write(CoinOverlap { hero, coin });
            }
        }
    }
}

/// Play the coin cue and remove the coin from play, once per live coin.
pub(crate) fn collect_coins(
    mut commands: Commands,
    mut overlaps: MessageReader<CoinOverlap>,
    coins: Query<(), With<Coin>>,
    mut cues: MessageWriter<AudioCue>,
) {
    // Despawn is deferred, so a coin can still match the query this frame
    let mut collected = HashSet::new();

    for overlap in overlaps.read() {
        if !coins.contains(overlap.coin) || !collected.insert(overlap.coin) {
            continue;
        }

        cues.write(AudioCue::Coin);
        commands.entity(overlap.coin).despawn();
        debug!("Coin {:?} collected by {:?}", overlap.coin, overlap.hero);
    }
}
