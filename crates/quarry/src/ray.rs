//! Ray primitives and the caster trait.
//!
//! A query is a [`Ray`] plus a [`SurfaceMask`] selecting which surface
//! classes may answer. The result, when any surface intersects the ray
//! within its reach, is a [`RayHit`] carrying the contact point, the surface
//! normal, the surface classification, and the velocity the surface carries
//! (non-zero only for moving platforms).
//!
//! Consumers depend on the [`RayCaster`] trait rather than on a concrete
//! world, so a movement core can be driven by any host query engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Classification of a hit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Immovable level geometry (tiles, walls, ceilings).
    Static,
    /// A platform with its own velocity; actors standing on it are carried.
    MovingPlatform,
}

bitflags::bitflags! {
    /// Filter selecting which surface classes a query may hit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SurfaceMask: u8 {
        /// Static level geometry.
        const STATIC = 1 << 0;
        /// Moving platforms.
        const MOVING_PLATFORM = 1 << 1;
        /// Every surface class.
        const ALL = Self::STATIC.bits() | Self::MOVING_PLATFORM.bits();
    }
}

impl SurfaceMask {
    /// Whether a surface of the given kind passes this mask.
    #[must_use]
    pub fn matches(self, kind: SurfaceKind) -> bool {
        match kind {
            SurfaceKind::Static => self.contains(Self::STATIC),
            SurfaceKind::MovingPlatform => self.contains(Self::MOVING_PLATFORM),
        }
    }
}

/// A finite directed ray.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Start point of the ray.
    pub origin: Vec2,
    /// Unit direction. Normalized by [`Ray::new`].
    pub direction: Vec2,
    /// Maximum reach; hits beyond this distance are misses.
    pub max_distance: f32,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    ///
    /// A zero direction yields a zero direction vector and the ray can never
    /// hit; callers probing along a displacement skip the query when the
    /// displacement is zero.
    #[must_use]
    pub fn new(origin: Vec2, direction: Vec2, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            max_distance,
        }
    }

    /// Point at parametric distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// Result of a successful cast: the closest surface the ray crossed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// World-space contact point.
    pub point: Vec2,
    /// Unit surface normal at the contact, oriented against the ray.
    pub normal: Vec2,
    /// Distance from the ray origin to the contact point.
    pub distance: f32,
    /// Classification of the hit surface.
    pub kind: SurfaceKind,
    /// Velocity carried by the surface (zero for static geometry).
    pub carried_velocity: Vec2,
}

/// Synchronous ray-query oracle.
///
/// Implementations return the closest hit whose surface class passes the
/// mask, or `None` when nothing intersects within the ray's reach. A miss is
/// a normal outcome, not a failure.
pub trait RayCaster {
    /// Cast a ray, returning the closest matching hit.
    fn cast(&self, ray: Ray, mask: SurfaceMask) -> Option<RayHit>;
}
