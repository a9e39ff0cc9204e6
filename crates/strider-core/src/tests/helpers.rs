//! Test helper functions for building worlds and actors.
//!
//! Factories here keep scenario tests readable: a standard actor (box
//! 0.5 x 1.0, the proportions the default config was tuned around) and a
//! handful of canonical worlds.

use glam::Vec2;
use quarry::{Aabb, Collider, ColliderWorld};

use crate::body::KinematicBody;
use crate::config::MovementConfig;
use crate::policy::DirectionIntent;
use crate::solver::{FrameInput, MovementSolver};

/// Fixed timestep used by scenario tests.
pub const DT: f32 = 1.0 / 60.0;

/// Standard actor: half-extents (0.25, 0.5), so a 0.5 x 1.0 box.
pub fn actor_at(position: Vec2) -> KinematicBody {
    KinematicBody::new(position, Vec2::new(0.25, 0.5)).unwrap()
}

/// Solver with the default configuration for the given actor.
pub fn default_solver(body: &KinematicBody) -> MovementSolver {
    MovementSolver::new(MovementConfig::default(), body).unwrap()
}

/// Flat static ground: top surface at y = 0, spanning x in [-50, 50].
pub fn flat_world() -> ColliderWorld {
    let mut world = ColliderWorld::new();
    world
        .add(Collider::static_box(Aabb::from_min_max(
            Vec2::new(-50.0, -1.0),
            Vec2::new(50.0, 0.0),
        )))
        .unwrap();
    world
}

/// Flat ground plus a wall on the right: wall face at x = 3.
pub fn walled_world() -> ColliderWorld {
    let mut world = flat_world();
    world
        .add(Collider::static_box(Aabb::from_min_max(
            Vec2::new(3.0, 0.0),
            Vec2::new(4.0, 5.0),
        )))
        .unwrap();
    world
}

/// Flat ground plus a low ceiling: underside at y = 1.2.
pub fn low_ceiling_world() -> ColliderWorld {
    let mut world = flat_world();
    world
        .add(Collider::static_box(Aabb::from_min_max(
            Vec2::new(-50.0, 1.2),
            Vec2::new(50.0, 2.0),
        )))
        .unwrap();
    world
}

/// A moving platform (top at y = 0, x in [-2, 2]) carrying `velocity`,
/// plus separate static ground with its top also at y = 0 over x in
/// [10, 20].
pub fn platform_world(velocity: Vec2) -> ColliderWorld {
    let mut world = ColliderWorld::new();
    world
        .add(Collider::moving_box(
            Aabb::from_min_max(Vec2::new(-2.0, -0.5), Vec2::new(2.0, 0.0)),
            velocity,
        ))
        .unwrap();
    world
        .add(Collider::static_box(Aabb::from_min_max(
            Vec2::new(10.0, -1.0),
            Vec2::new(20.0, 0.0),
        )))
        .unwrap();
    world
}

/// Neutral input for a living actor.
pub fn idle_input() -> FrameInput {
    FrameInput::new(DirectionIntent::idle(), DT)
}

/// Walk input with the given axis value.
pub fn walk_input(h: f32) -> FrameInput {
    FrameInput::new(
        DirectionIntent {
            horizontal: h,
            ..DirectionIntent::default()
        },
        DT,
    )
}

/// Jump-press input (edge frame).
pub fn jump_input() -> FrameInput {
    FrameInput::new(
        DirectionIntent {
            jump_pressed: true,
            ..DirectionIntent::default()
        },
        DT,
    )
}
