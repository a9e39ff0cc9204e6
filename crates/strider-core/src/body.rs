//! The kinematic actor body the solver steers.
//!
//! A body is an axis-aligned box (center plus half-extents) with the
//! velocity and rotation the solver last handed it. The solver writes
//! position corrections (snapping, tunneling-guard repositioning) directly
//! and immediately, because probes issued later in the same frame must read
//! the corrected position. Position integration itself stays on the host
//! side; [`KinematicBody::integrate`] is the hook a host (or a test) calls
//! once per frame after the solver step.

use glam::Vec2;
use quarry::Aabb;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Rectangular kinematic actor body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    /// Center of the bounding box in world space.
    pub position: Vec2,
    /// Half-extents of the bounding box.
    pub half_extents: Vec2,
    /// Velocity last handed over by the solver.
    pub velocity: Vec2,
    /// Visual tilt in radians last handed over by the solver.
    pub rotation: f32,
}

impl KinematicBody {
    /// Creates a body at a position with the given half-extents.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BadHalfExtents`] unless both half-extents are
    /// strictly positive; a degenerate box is a fatal configuration error,
    /// not something to mask at runtime.
    pub fn new(position: Vec2, half_extents: Vec2) -> Result<Self, ConfigError> {
        if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
            return Err(ConfigError::BadHalfExtents {
                x: half_extents.x,
                y: half_extents.y,
            });
        }
        Ok(Self {
            position,
            half_extents,
            velocity: Vec2::ZERO,
            rotation: 0.0,
        })
    }

    /// Full box size (twice the half-extents).
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Current bounding box.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_half(self.position, self.half_extents)
    }

    /// Y of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.position.y - self.half_extents.y
    }

    /// Y of the top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.position.y + self.half_extents.y
    }

    /// Moves the body so its bottom edge sits at `y`.
    pub fn snap_bottom_to(&mut self, y: f32) {
        self.position.y = y + self.half_extents.y;
    }

    /// Moves the body so its top edge sits at `y`.
    pub fn snap_top_to(&mut self, y: f32) {
        self.position.y = y - self.half_extents.y;
    }

    /// Moves the body so its left edge sits at `x`.
    pub fn snap_left_to(&mut self, x: f32) {
        self.position.x = x + self.half_extents.x;
    }

    /// Moves the body so its right edge sits at `x`.
    pub fn snap_right_to(&mut self, x: f32) {
        self.position.x = x - self.half_extents.x;
    }

    /// Host-side position integration: `position += velocity * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
