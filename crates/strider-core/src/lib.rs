//! # Strider Core
//!
//! Kinematic 2D platformer movement core.
//!
//! This crate turns a desired horizontal input and jump intent into a
//! corrected position, velocity, and orientation for a rectangular actor
//! moving through a tile/platform world, using discrete raycast probes
//! instead of a rigid-body solver. It owns the concerns a physics engine
//! normally would: collision detection, penetration correction,
//! ground/wall/ceiling classification, slope tolerance, moving-platform
//! carrying, and the jump state machine.
//!
//! ## Architecture
//!
//! The per-frame pipeline, leaves first:
//!
//! - **[`probe::CollisionProbe`]**: builds and casts the ray queries (four
//!   directional sets plus the tunneling-guard sweep and slope sample).
//! - **[`classify::GroundClassifier`]**: reduces hits to contact flags and
//!   extremal bounds and reconciles the jump machine with ground contact.
//! - **[`slope`]**: maps the slope sample to a clamped visual rotation.
//! - **[`velocity::VelocityResolver`]**: horizontal input shaping and the
//!   vertical jump state machine.
//! - **[`solver::MovementSolver`]**: runs the pipeline in fixed order and
//!   closes the frame out (clamping, platform carry, death freeze).
//!
//! The world is consumed through the [`quarry::RayCaster`] oracle; input
//! comes from a [`policy::DirectionPolicy`]. Neither is looked up
//! ambiently; both are passed in explicitly.
//!
//! ## Usage
//!
//! ```
//! use strider_core::{KinematicBody, MovementConfig, MovementSolver};
//! use strider_core::solver::FrameInput;
//! use strider_core::policy::DirectionIntent;
//! use quarry::{Aabb, Collider, ColliderWorld};
//! use glam::Vec2;
//!
//! let mut world = ColliderWorld::new();
//! world
//!     .add(Collider::static_box(Aabb::from_min_max(
//!         Vec2::new(-50.0, -1.0),
//!         Vec2::new(50.0, 0.0),
//!     )))
//!     .unwrap();
//!
//! let mut body = KinematicBody::new(Vec2::new(0.0, 0.5), Vec2::new(0.25, 0.5))?;
//! let mut solver = MovementSolver::new(MovementConfig::default(), &body)?;
//!
//! let input = FrameInput::new(DirectionIntent::walk_right(), 1.0 / 60.0);
//! let output = solver.step(&mut body, &world, &input);
//! assert!(output.contacts.below());
//! assert!(output.velocity.x > 0.0);
//! # Ok::<(), strider_core::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export quarry so hosts can build worlds without a separate dependency.
pub use quarry;

pub mod body;
pub mod classify;
pub mod config;
pub mod policy;
pub mod probe;
pub mod slope;
pub mod solver;
pub mod state;
pub mod velocity;

// Re-exports for convenience
pub use body::KinematicBody;
pub use classify::{GroundClassifier, GroundContact};
pub use config::{ConfigError, MovementConfig};
pub use policy::{ConstantPolicy, DirectionIntent, DirectionPolicy, ScriptedPolicy};
pub use probe::CollisionProbe;
pub use solver::{FrameInput, FrameOutput, MovementSolver};
pub use state::{ContactFlags, ContactState, Facing, JumpState};
pub use velocity::{HorizontalOutcome, VelocityResolver, INPUT_DEAD_ZONE};

#[cfg(test)]
mod tests;
