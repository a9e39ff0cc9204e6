//! # Quarry
//!
//! 2D raycast substrate for kinematic character queries.
//!
//! Quarry represents a platformer world as a flat list of colliders (tiles,
//! walls, ramps, moving platforms) and answers discrete ray queries against
//! it. It is the "query oracle" side of the movement core: a miss is a normal
//! branch, never an error, and every query is synchronous and deterministic.
//!
//! ## Quick Start
//!
//! ```
//! use quarry::{Aabb, Collider, ColliderWorld, Ray, RayCaster, SurfaceMask};
//! use glam::Vec2;
//!
//! let mut world = ColliderWorld::new();
//! world
//!     .add(Collider::static_box(Aabb::from_min_max(
//!         Vec2::new(-10.0, -1.0),
//!         Vec2::new(10.0, 0.0),
//!     )))
//!     .unwrap();
//!
//! // Probe straight down from a point above the ground.
//! let ray = Ray::new(Vec2::new(0.0, 2.0), Vec2::NEG_Y, 5.0);
//! let hit = world.cast(ray, SurfaceMask::ALL).unwrap();
//! assert!((hit.point.y - 0.0).abs() < 1e-6);
//! assert_eq!(hit.normal, Vec2::Y);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ray;
pub mod world;

// Re-exports for convenience
pub use ray::{Ray, RayCaster, RayHit, SurfaceKind, SurfaceMask};
pub use world::{Collider, ColliderShape, ColliderWorld, WorldError};

/// Axis-aligned bounding box in 2D.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: glam::Vec2,
    /// Maximum corner
    pub max: glam::Vec2,
}

impl Aabb {
    /// Create bounds from min/max corners.
    #[must_use]
    pub fn from_min_max(min: glam::Vec2, max: glam::Vec2) -> Self {
        Self { min, max }
    }

    /// Create bounds from a center point and half-extents.
    #[must_use]
    pub fn from_center_half(center: glam::Vec2, half: glam::Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get the center of the bounds.
    #[must_use]
    pub fn center(&self) -> glam::Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the size of the bounds.
    #[must_use]
    pub fn size(&self) -> glam::Vec2 {
        self.max - self.min
    }

    /// Get the half-extents of the bounds.
    #[must_use]
    pub fn half(&self) -> glam::Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Check if a point is inside the bounds.
    #[must_use]
    pub fn contains(&self, point: glam::Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}
