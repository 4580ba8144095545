//! Level domain: building platforms, the hero and coins from the layout.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{AssetCatalog, GameplayDefaults, LevelData, SceneAssets, WorldConfig};
use crate::level::components::{Coin, CoinGroup, Platform, PlatformGroup};
use crate::level::layout::{BodyPlacement, LevelLayout, PlatformPlacement};
use crate::movement::{GameLayer, Hero, MovementState, MovementTuning};
use crate::sprites::SpriteAnimation;

const PLATFORM_Z: f32 = 0.0;
const COIN_Z: f32 = 1.0;
const HERO_Z: f32 = 2.0;

pub(crate) fn spawn_level(
    mut commands: Commands,
    level: Res<LevelData>,
    catalog: Res<AssetCatalog>,
    world: Res<WorldConfig>,
    tuning: Res<MovementTuning>,
    defaults: Res<GameplayDefaults>,
    assets: Res<SceneAssets>,
    mut exit: MessageWriter<AppExit>,
) {
    let layout = match LevelLayout::build(&level, &catalog, &world) {
        Ok(layout) => layout,
        Err(e) => {
            error!("Cannot build level: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    // Groups first, so every entity below has somewhere to live
    let platform_group = commands
        .spawn((
            Name::new("Platforms"),
            PlatformGroup,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    let coin_group = commands
        .spawn((
            Name::new("Coins"),
            CoinGroup,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    commands.insert_resource(Gravity(Vec2::NEG_Y * tuning.gravity));

    for placement in &layout.platforms {
        spawn_platform(&mut commands, placement, &assets, platform_group);
    }

    spawn_hero(&mut commands, &layout.hero, &assets);

    for placement in &layout.coins {
        spawn_coin(&mut commands, placement, &assets, &defaults, coin_group);
    }

    info!(
        "Level built: {} platforms, {} coins, hero at {:?}, gravity {}",
        layout.platforms.len(),
        layout.coins.len(),
        layout.hero.center,
        tuning.gravity
    );
}

fn spawn_platform(
    commands: &mut Commands,
    placement: &PlatformPlacement,
    assets: &SceneAssets,
    group: Entity,
) {
    commands.spawn((
        Name::new(format!("Platform {}", placement.image)),
        Platform {
            image: placement.image.clone(),
        },
        Sprite::from_image(assets.image(&placement.image)),
        Transform::from_translation(placement.center.extend(PLATFORM_Z)),
        ChildOf(group),
        // Physics: never displaced, never falls
        (
            RigidBody::Static,
            GravityScale(0.0),
            Collider::rectangle(placement.size.x, placement.size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Hero]),
        ),
    ));
}

fn spawn_hero(commands: &mut Commands, placement: &BodyPlacement, assets: &SceneAssets) {
    commands.spawn((
        // Identity & Movement
        (Name::new("Hero"), Hero, MovementState::default()),
        // Rendering
        Sprite::from_image(assets.image("hero")),
        Transform::from_translation(placement.center.extend(HERO_Z)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(placement.size.x, placement.size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            Restitution::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Hero, [GameLayer::Ground, GameLayer::Pickup]),
        ),
    ));
}

fn spawn_coin(
    commands: &mut Commands,
    placement: &BodyPlacement,
    assets: &SceneAssets,
    defaults: &GameplayDefaults,
    group: Entity,
) {
    let sheet = assets.sheet("coin");
    let animation = SpriteAnimation::from_def(&defaults.coin_animation);

    commands.spawn((
        Name::new("Coin"),
        Coin,
        Sprite::from_atlas_image(
            sheet.image,
            TextureAtlas {
                layout: sheet.layout,
                index: animation.current_frame(),
            },
        ),
        animation,
        Transform::from_translation(placement.center.extend(COIN_Z)),
        ChildOf(group),
        // Physics: overlap only, no gravity
        (
            RigidBody::Static,
            GravityScale(0.0),
            Sensor,
            Collider::rectangle(placement.size.x, placement.size.y),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Pickup, [GameLayer::Hero]),
        ),
    ));
}
