//! Movement domain: ground detection and world-bound clamping.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::WorldConfig;
use crate::movement::{GameLayer, Hero, MovementState, MovementTuning};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Hero>>,
) {
    // Only platforms count as ground (not coins or the hero itself)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 21.0,
        };

        // Cast a short ray downward from the hero's feet
        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            debug!("Landed at {:?}", ray_origin);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at {:?}", ray_origin);
        }
    }
}

/// Which edges of the world a body is pressed against.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockedEdges {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Clamp a body centred at `center` with `half_size` inside a world of
/// `world_half` extents centred on the origin. Velocity pointing out of the
/// world through a blocked edge is zeroed.
pub fn clamp_to_bounds(
    center: Vec2,
    half_size: Vec2,
    world_half: Vec2,
    velocity: &mut Vec2,
) -> (Vec2, BlockedEdges) {
    let min = -world_half + half_size;
    let max = world_half - half_size;
    let clamped = center.clamp(min, max.max(min));

    let blocked = BlockedEdges {
        left: center.x <= min.x,
        right: center.x >= max.x,
        down: center.y <= min.y,
        up: center.y >= max.y,
    };

    if (blocked.left && velocity.x < 0.0) || (blocked.right && velocity.x > 0.0) {
        velocity.x = 0.0;
    }
    if (blocked.down && velocity.y < 0.0) || (blocked.up && velocity.y > 0.0) {
        velocity.y = 0.0;
    }

    (clamped, blocked)
}

pub(crate) fn clamp_to_world_bounds(
    world: Res<WorldConfig>,
    mut query: Query<(&mut Position, &mut LinearVelocity, &Collider), With<Hero>>,
) {
    for (mut position, mut velocity, collider) in &mut query {
        let half_size = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::splat(21.0),
        };

        let (clamped, _) =
            clamp_to_bounds(position.0, half_size, world.half_extents(), &mut velocity.0);
        if clamped != position.0 {
            position.0 = clamped;
        }
    }
}
