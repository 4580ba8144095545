//! Debug domain: overlay toggling and refresh.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::WorldConfig;
use crate::debug::{DebugInfoOverlay, DebugState};
use crate::level::Coin;
use crate::movement::{Hero, MovementState};

pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug overlay: {}", debug_state.show_info);
    }
}

pub(crate) fn hide_physics_gizmos(mut store: ResMut<GizmoConfigStore>) {
    store.config_mut::<PhysicsGizmos>().0.enabled = false;
}

pub(crate) fn toggle_physics_gizmos(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut store: ResMut<GizmoConfigStore>,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        let config = store.config_mut::<PhysicsGizmos>().0;
        config.enabled = !config.enabled;
        info!("Collider outlines: {}", config.enabled);
    }
}

/// Overlay text for the hero. Position is reported in level space (y down).
pub(crate) fn format_debug_info(
    world: &WorldConfig,
    translation: Vec2,
    velocity: Vec2,
    on_ground: bool,
    coins_left: usize,
) -> String {
    let level_x = translation.x + world.width * 0.5;
    let level_y = world.height * 0.5 - translation.y;
    format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nGrounded: {}\nCoins: {}",
        level_x, level_y, velocity.x, velocity.y, on_ground, coins_left
    )
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    world: Res<WorldConfig>,
    hero_query: Query<(&Transform, &LinearVelocity, &MovementState), With<Hero>>,
    coin_query: Query<(), With<Coin>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, velocity, state)), Ok(mut text)) =
        (hero_query.iter().next(), overlay_query.single_mut())
    {
        **text = format_debug_info(
            &world,
            transform.translation.truncate(),
            velocity.0,
            state.on_ground,
            coin_query.iter().count(),
        );
    }
}
