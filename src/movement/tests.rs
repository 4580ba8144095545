//! Movement domain: tests for the hero body, input mapping and bounds.

use avian2d::prelude::{Collider, LinearVelocity, Position};
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{apply_horizontal_movement, apply_jump, clamp_to_world_bounds, read_input};
use super::*;
use crate::audio::AudioCue;
use crate::content::WorldConfig;

fn grounded() -> MovementState {
    MovementState { on_ground: true }
}

fn airborne() -> MovementState {
    MovementState { on_ground: false }
}

// -----------------------------------------------------------------------------
// HeroBody
// -----------------------------------------------------------------------------

#[test]
fn test_move_sets_horizontal_velocity() {
    let tuning = MovementTuning::default();

    for direction in [-1.0, 0.0, 1.0] {
        let mut velocity = LinearVelocity(Vec2::new(37.0, -12.0));
        let mut state = airborne();
        HeroBody::new(&mut velocity, &mut state, &tuning).move_horizontally(direction);

        assert_eq!(velocity.x, direction * 200.0);
        assert_eq!(velocity.y, -12.0, "move must not touch vertical velocity");
    }
}

#[test]
fn test_move_is_idempotent() {
    let tuning = MovementTuning::default();
    let mut velocity = LinearVelocity::default();
    let mut state = grounded();

    let mut body = HeroBody::new(&mut velocity, &mut state, &tuning);
    body.move_horizontally(1.0);
    body.move_horizontally(1.0);

    assert_eq!(velocity.x, 200.0);
}

#[test]
fn test_jump_when_grounded() {
    let tuning = MovementTuning::default();
    let mut velocity = LinearVelocity(Vec2::new(200.0, 0.0));
    let mut state = grounded();

    assert!(HeroBody::new(&mut velocity, &mut state, &tuning).jump());
    assert_eq!(velocity.y, 600.0);
    assert_eq!(velocity.x, 200.0);
    assert!(!state.on_ground);
}

#[test]
fn test_jump_when_airborne_is_rejected() {
    let tuning = MovementTuning::default();
    let mut velocity = LinearVelocity(Vec2::new(0.0, -150.0));
    let mut state = airborne();

    assert!(!HeroBody::new(&mut velocity, &mut state, &tuning).jump());
    assert_eq!(velocity.0, Vec2::new(0.0, -150.0));
}

#[test]
fn test_double_jump_changes_velocity_once() {
    let tuning = MovementTuning::default();
    let mut velocity = LinearVelocity::default();
    let mut state = grounded();

    let mut body = HeroBody::new(&mut velocity, &mut state, &tuning);
    assert!(body.jump());
    assert!(!body.jump());

    assert_eq!(velocity.y, 600.0);
}

// -----------------------------------------------------------------------------
// Tuning and input
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning() {
    let tuning = MovementTuning::default();
    assert_eq!(tuning.speed, 200.0);
    assert_eq!(tuning.jump_speed, 600.0);
    assert_eq!(tuning.gravity, 1200.0);
    // 600² / 2400
    assert_eq!(tuning.jump_height(), 150.0);
}

#[test]
fn test_input_direction_left_wins() {
    let both = MovementInput {
        left_held: true,
        right_held: true,
    };
    assert_eq!(both.direction(), -1.0);

    let right = MovementInput {
        left_held: false,
        right_held: true,
    };
    assert_eq!(right.direction(), 1.0);

    assert_eq!(MovementInput::default().direction(), 0.0);
}

// -----------------------------------------------------------------------------
// World bounds
// -----------------------------------------------------------------------------

#[test]
fn test_clamp_inside_world_is_untouched() {
    let mut velocity = Vec2::new(200.0, -300.0);
    let (pos, blocked) = clamp_to_bounds(
        Vec2::new(10.0, 10.0),
        Vec2::splat(21.0),
        Vec2::new(480.0, 300.0),
        &mut velocity,
    );

    assert_eq!(pos, Vec2::new(10.0, 10.0));
    assert_eq!(blocked, BlockedEdges::default());
    assert_eq!(velocity, Vec2::new(200.0, -300.0));
}

#[test]
fn test_clamp_stops_at_left_and_bottom_edges() {
    let mut velocity = Vec2::new(-200.0, -500.0);
    let (pos, blocked) = clamp_to_bounds(
        Vec2::new(-500.0, -320.0),
        Vec2::splat(21.0),
        Vec2::new(480.0, 300.0),
        &mut velocity,
    );

    assert_eq!(pos, Vec2::new(-459.0, -279.0));
    assert!(blocked.left && blocked.down);
    assert!(!blocked.right && !blocked.up);
    assert_eq!(velocity, Vec2::ZERO);
}

#[test]
fn test_clamp_keeps_velocity_pointing_inward() {
    let mut velocity = Vec2::new(-200.0, 100.0);
    let (pos, blocked) = clamp_to_bounds(
        Vec2::new(470.0, 0.0),
        Vec2::splat(21.0),
        Vec2::new(480.0, 300.0),
        &mut velocity,
    );

    assert_eq!(pos.x, 459.0);
    assert!(blocked.right);
    assert_eq!(velocity, Vec2::new(-200.0, 100.0));
}

fn bounded_hero(world: &mut World, position: Vec2, velocity: Vec2) -> Entity {
    world
        .spawn((
            Hero,
            Position(position),
            LinearVelocity(velocity),
            Collider::rectangle(42.0, 42.0),
        ))
        .id()
}

fn hero_position_and_velocity(world: &World, hero: Entity) -> (Vec2, Vec2) {
    (
        world.get::<Position>(hero).unwrap().0,
        world.get::<LinearVelocity>(hero).unwrap().0,
    )
}

#[test]
fn test_world_bounds_system_pulls_hero_back_inside() {
    let mut world = World::new();
    world.insert_resource(WorldConfig::default());
    let past_right = bounded_hero(&mut world, Vec2::new(500.0, 0.0), Vec2::new(200.0, 50.0));
    let below_floor = bounded_hero(&mut world, Vec2::new(0.0, -400.0), Vec2::new(-30.0, -300.0));

    world.run_system_once(clamp_to_world_bounds).unwrap();

    // 960x600 world, 42x42 collider: centre stays within +-459 / +-279
    assert_eq!(
        hero_position_and_velocity(&world, past_right),
        (Vec2::new(459.0, 0.0), Vec2::new(0.0, 50.0))
    );
    assert_eq!(
        hero_position_and_velocity(&world, below_floor),
        (Vec2::new(0.0, -279.0), Vec2::new(-30.0, 0.0))
    );
}

#[test]
fn test_world_bounds_system_leaves_inside_hero_alone() {
    let mut world = World::new();
    world.insert_resource(WorldConfig::default());
    let hero = bounded_hero(&mut world, Vec2::new(-100.0, 50.0), Vec2::new(-200.0, 600.0));

    world.run_system_once(clamp_to_world_bounds).unwrap();

    assert_eq!(
        hero_position_and_velocity(&world, hero),
        (Vec2::new(-100.0, 50.0), Vec2::new(-200.0, 600.0))
    );
}

// -----------------------------------------------------------------------------
// Input systems
// -----------------------------------------------------------------------------

fn input_world() -> World {
    let mut world = World::new();
    world.init_resource::<MovementTuning>();
    world.init_resource::<MovementInput>();
    world.init_resource::<KeyBindings>();
    world.init_resource::<ButtonInput<KeyCode>>();
    world.init_resource::<Messages<JumpPressed>>();
    world.init_resource::<Messages<AudioCue>>();
    world
}

fn spawn_hero(world: &mut World, state: MovementState, velocity: Vec2) -> Entity {
    world
        .spawn((Hero, state, LinearVelocity(velocity)))
        .id()
}

fn run_input_pass(world: &mut World) {
    world.run_system_once(read_input).unwrap();
    world.run_system_once(apply_horizontal_movement).unwrap();
    world.run_system_once(apply_jump).unwrap();
}

fn drain_cues(world: &mut World) -> Vec<AudioCue> {
    world.resource_mut::<Messages<AudioCue>>().drain().collect()
}

#[test]
fn test_held_keys_drive_hero() {
    let mut world = input_world();
    let hero = spawn_hero(&mut world, grounded(), Vec2::ZERO);

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    run_input_pass(&mut world);
    assert_eq!(world.get::<LinearVelocity>(hero).unwrap().x, 200.0);

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    run_input_pass(&mut world);
    assert_eq!(
        world.get::<LinearVelocity>(hero).unwrap().x,
        -200.0,
        "left takes precedence over right"
    );
}

#[test]
fn test_releasing_keys_stops_hero() {
    let mut world = input_world();
    let hero = spawn_hero(&mut world, grounded(), Vec2::new(-200.0, 0.0));

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowLeft);
    run_input_pass(&mut world);
    assert_eq!(world.get::<LinearVelocity>(hero).unwrap().x, -200.0);

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::ArrowLeft);
    run_input_pass(&mut world);
    assert_eq!(world.get::<LinearVelocity>(hero).unwrap().x, 0.0);
}

#[test]
fn test_jump_press_plays_cue_when_grounded() {
    let mut world = input_world();
    let hero = spawn_hero(&mut world, grounded(), Vec2::ZERO);

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowUp);
    run_input_pass(&mut world);

    assert_eq!(world.get::<LinearVelocity>(hero).unwrap().y, 600.0);
    assert_eq!(drain_cues(&mut world), vec![AudioCue::Jump]);
}

#[test]
fn test_jump_press_while_airborne_is_silent() {
    let mut world = input_world();
    let hero = spawn_hero(&mut world, airborne(), Vec2::new(0.0, -80.0));

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowUp);
    run_input_pass(&mut world);

    assert_eq!(world.get::<LinearVelocity>(hero).unwrap().y, -80.0);
    assert!(drain_cues(&mut world).is_empty());
}

#[test]
fn test_held_jump_key_fires_once() {
    let mut world = input_world();
    spawn_hero(&mut world, grounded(), Vec2::ZERO);

    world
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowUp);
    run_input_pass(&mut world);

    // Next frame: key still held, hero grounded again, but no new press
    world.resource_mut::<ButtonInput<KeyCode>>().clear();
    world.resource_mut::<Messages<JumpPressed>>().clear();
    for mut state in world
        .query::<&mut MovementState>()
        .iter_mut(&mut world)
    {
        state.on_ground = true;
    }
    run_input_pass(&mut world);

    assert!(
        world
            .resource::<ButtonInput<KeyCode>>()
            .pressed(KeyCode::ArrowUp)
    );
    assert_eq!(drain_cues(&mut world), vec![AudioCue::Jump]);
}
