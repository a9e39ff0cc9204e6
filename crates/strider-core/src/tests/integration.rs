//! End-to-end movement scenarios.
//!
//! Each test drives the full frame pipeline against a real collider world,
//! emulating the host loop: `solver.step` then `body.integrate`.

use glam::Vec2;
use quarry::{Aabb, Collider, ColliderWorld};

use crate::policy::DirectionIntent;
use crate::solver::FrameInput;
use crate::state::{Facing, JumpState};

use super::helpers::{
    actor_at, default_solver, flat_world, idle_input, jump_input, low_ceiling_world,
    platform_world, walk_input, walled_world, DT,
};

// =============================================================================
// Ground contact and snapping
// =============================================================================

#[test]
fn penetrating_actor_snaps_bottom_to_ground() {
    // Box height 1, flat ground at y = 0, bottom already 0.2 below the
    // surface: contact below, groundY = 0, center snapped to 0.5.
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 0.3));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &idle_input());

    assert!(out.contacts.below());
    assert_eq!(out.contacts.ground_y, 0.0);
    assert!((body.position.y - 0.5).abs() < 1e-6);
    assert!((body.bottom() - 0.0).abs() < 1e-6);
}

#[test]
fn falling_actor_lands_on_ground() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 1.5));
    let mut solver = default_solver(&body);

    for _ in 0..200 {
        let out = solver.step(&mut body, &world, &idle_input());
        if out.contacts.below() {
            assert!((body.bottom() - 0.0).abs() < 1e-5);
            assert_eq!(out.jump, JumpState::Grounded);
            return;
        }
        assert_eq!(out.jump, JumpState::Falling);
        assert!(out.velocity.y < 0.0);
        body.integrate(DT);
    }
    panic!("actor never landed");
}

#[test]
fn grounded_actor_stays_put_without_input() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    for _ in 0..60 {
        let out = solver.step(&mut body, &world, &idle_input());
        assert!(out.contacts.below());
        assert_eq!(out.velocity, Vec2::ZERO);
        body.integrate(DT);
    }
    assert!((body.position.x - 0.0).abs() < 1e-6);
    assert!((body.bottom() - 0.0).abs() < 1e-6);
}

// =============================================================================
// Walls
// =============================================================================

#[test]
fn walking_into_wall_stops_at_its_face() {
    let world = walled_world();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let mut hit_wall = false;
    for _ in 0..100 {
        let out = solver.step(&mut body, &world, &walk_input(1.0));
        if out.contacts.right() {
            hit_wall = true;
            assert!((out.contacts.right_wall_x - 3.0).abs() < 1e-5);
            assert_eq!(out.velocity.x, 0.0);
        }
        body.integrate(DT);
    }
    assert!(hit_wall, "actor never reached the wall");
    // Right edge flush against the wall face at x = 3.
    assert!((body.position.x - 2.75).abs() < 1e-5);
}

// =============================================================================
// Jumping
// =============================================================================

#[test]
fn jump_records_start_and_target_then_lands() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &jump_input());
    assert_eq!(
        out.jump,
        JumpState::Ascending {
            start_height: 0.5,
            target_height: 5.5,
        }
    );
    assert_eq!(out.velocity.y, solver.config().jump_speed);
    body.integrate(DT);

    let mut max_height = body.position.y;
    let mut apex_seen = false;
    for _ in 0..400 {
        let out = solver.step(&mut body, &world, &idle_input());
        body.integrate(DT);
        max_height = max_height.max(body.position.y);
        if !apex_seen && out.jump == JumpState::Falling {
            apex_seen = true;
        }
        if apex_seen && out.contacts.below() {
            // Back on the ground after a full arc.
            assert!(max_height >= 5.5, "jump never reached its target");
            assert!(max_height < 6.0, "jump overshot the velocity-controlled arc");
            assert_eq!(out.jump, JumpState::Grounded);
            return;
        }
    }
    panic!("jump arc never completed");
}

#[test]
fn ceiling_contact_ends_ascent_the_same_frame() {
    let world = low_ceiling_world();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &jump_input());
    assert!(out.jump.is_ascending());
    body.integrate(DT);

    for _ in 0..100 {
        let out = solver.step(&mut body, &world, &idle_input());
        if out.contacts.above() {
            // The exit happens in the frame the ceiling is first seen.
            assert_eq!(out.jump, JumpState::Falling);
            assert!((out.contacts.ceiling_y - 1.2).abs() < 1e-5);
            assert!((body.top() - 1.2).abs() < 1e-5);
            return;
        }
        assert!(out.jump.is_ascending());
        body.integrate(DT);
    }
    panic!("actor never reached the ceiling");
}

#[test]
fn jump_request_in_the_air_is_ignored() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 3.0));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &jump_input());
    assert_eq!(out.jump, JumpState::Falling);
    assert!(out.velocity.y < 0.0);
}

// =============================================================================
// Moving platforms
// =============================================================================

#[test]
fn standing_on_platform_adopts_its_velocity() {
    let world = platform_world(Vec2::new(2.0, 0.0));
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &idle_input());
    assert!(out.contacts.below());
    assert_eq!(solver.carried_velocity(), Vec2::new(2.0, 0.0));
    assert_eq!(out.velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn carry_is_retained_while_airborne() {
    let world = platform_world(Vec2::new(2.0, 0.0));
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);
    solver.step(&mut body, &world, &idle_input());

    // Walked off the platform edge: no ground contact at all.
    body.position = Vec2::new(5.0, 0.5);
    let out = solver.step(&mut body, &world, &idle_input());
    assert!(!out.contacts.below());
    assert_eq!(solver.carried_velocity(), Vec2::new(2.0, 0.0));
    assert_eq!(out.velocity.x, 2.0);
    assert!(out.velocity.y < 0.0);
}

#[test]
fn carry_resets_on_static_ground() {
    let world = platform_world(Vec2::new(2.0, 0.0));
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);
    solver.step(&mut body, &world, &idle_input());
    assert_eq!(solver.carried_velocity(), Vec2::new(2.0, 0.0));

    // Landed on the static ground stretch.
    body.position = Vec2::new(15.0, 0.5);
    let out = solver.step(&mut body, &world, &idle_input());
    assert!(out.contacts.below());
    assert_eq!(solver.carried_velocity(), Vec2::ZERO);
    assert_eq!(out.velocity.x, 0.0);
}

// =============================================================================
// Tunneling guard
// =============================================================================

#[test]
fn guard_snaps_back_through_thin_wall() {
    let mut world = ColliderWorld::new();
    world
        .add(Collider::static_box(Aabb::from_min_max(
            Vec2::new(2.0, 0.0),
            Vec2::new(2.1, 3.0),
        )))
        .unwrap();
    let mut body = actor_at(Vec2::new(0.0, 1.0));
    let mut solver = default_solver(&body);

    // The host moved the actor clean through the wall in one frame.
    body.position = Vec2::new(5.0, 1.0);
    let out = solver.step(&mut body, &world, &idle_input());

    assert!(out.guard_fired);
    assert_eq!(out.velocity, Vec2::ZERO);
    assert!(out.contacts.flags.is_empty());
    assert!((body.position.x - 1.75).abs() < 1e-5);
    assert!((body.position.y - 1.0).abs() < 1e-5);
    assert_eq!(body.velocity, Vec2::ZERO);
}

#[test]
fn guard_does_not_fire_for_ordinary_motion() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    for _ in 0..60 {
        let out = solver.step(&mut body, &world, &walk_input(1.0));
        assert!(!out.guard_fired);
        body.integrate(DT);
    }
}

// =============================================================================
// Facing and liveness
// =============================================================================

#[test]
fn facing_mirror_event_fires_once_per_flip() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &walk_input(-1.0));
    assert_eq!(out.facing, Facing::Left);
    assert!(out.facing_changed);

    let out = solver.step(&mut body, &world, &walk_input(-1.0));
    assert_eq!(out.facing, Facing::Left);
    assert!(!out.facing_changed);
}

#[test]
fn dead_actor_loses_horizontal_control_but_still_falls() {
    let world = flat_world();
    let mut body = actor_at(Vec2::new(0.0, 5.0));
    let mut solver = default_solver(&body);

    let input = FrameInput {
        intent: DirectionIntent::walk_right(),
        alive: false,
        dt: DT,
    };
    let out = solver.step(&mut body, &world, &input);
    assert_eq!(out.velocity.x, 0.0);
    assert!(out.velocity.y < 0.0);
    assert!(!out.facing_changed);
}

// =============================================================================
// Slope tilt
// =============================================================================

#[test]
fn walkable_slope_tilts_the_actor() {
    let mut world = ColliderWorld::new();
    // Ramp rising 1:2 through the origin, about 26.6 degrees.
    world
        .add(Collider::static_segment(
            Vec2::new(-5.0, -2.5),
            Vec2::new(5.0, 2.5),
        ))
        .unwrap();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &idle_input());
    assert!(out.contacts.below());
    let expected = 0.5_f32.atan();
    assert!((out.rotation - expected).abs() < 1e-4);
    assert_eq!(body.rotation, out.rotation);
}

#[test]
fn steep_surface_does_not_tilt() {
    let mut world = ColliderWorld::new();
    // 60 degree face: steeper than the default 45 degree max slope.
    world
        .add(Collider::static_segment(
            Vec2::new(-2.0, -2.0 * 3.0_f32.sqrt()),
            Vec2::new(2.0, 2.0 * 3.0_f32.sqrt()),
        ))
        .unwrap();
    let mut body = actor_at(Vec2::new(0.0, 0.5));
    let mut solver = default_solver(&body);

    let out = solver.step(&mut body, &world, &idle_input());
    assert_eq!(out.rotation, 0.0);
}
