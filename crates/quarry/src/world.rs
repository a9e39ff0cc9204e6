//! Collider storage and ray intersection.
//!
//! The [`ColliderWorld`] is a flat, ordered list of colliders answering
//! [`RayCaster`] queries by scanning every collider and keeping the closest
//! matching hit. Linear scan is deliberate: platformer worlds driving a
//! single actor issue a few dozen short rays per frame, and a flat list
//! keeps iteration order (and therefore tie-breaking) deterministic.
//!
//! Two shapes are supported:
//!
//! - **Boxes** cover tiles, walls, ceilings, and platforms. Hits report the
//!   axis-aligned normal of the entered face.
//! - **Segments** are two-sided surfaces for ramps and other sloped ground;
//!   the reported normal is the segment perpendicular oriented against the
//!   ray.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ray::{Ray, RayCaster, RayHit, SurfaceKind, SurfaceMask};
use crate::Aabb;

/// Errors raised when building a collider world.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WorldError {
    /// A box collider with zero or negative extent on some axis.
    #[error("degenerate box collider: size {width}x{height}")]
    DegenerateBox {
        /// Box width (max.x - min.x).
        width: f32,
        /// Box height (max.y - min.y).
        height: f32,
    },
    /// A segment collider whose endpoints coincide.
    #[error("degenerate segment collider: endpoints coincide at {point}")]
    DegenerateSegment {
        /// The shared endpoint.
        point: Vec2,
    },
}

/// Geometric shape of a collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    /// Axis-aligned box.
    Box(Aabb),
    /// Two-sided line segment (for sloped surfaces).
    Segment {
        /// First endpoint.
        a: Vec2,
        /// Second endpoint.
        b: Vec2,
    },
}

/// A single solid surface in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    /// Geometry of the collider.
    pub shape: ColliderShape,
    /// Surface classification, used for mask filtering.
    pub kind: SurfaceKind,
    /// Velocity carried by the surface. Only meaningful for
    /// [`SurfaceKind::MovingPlatform`]; zero for static geometry.
    pub velocity: Vec2,
}

impl Collider {
    /// Static box geometry (tile, wall, ceiling).
    #[must_use]
    pub fn static_box(aabb: Aabb) -> Self {
        Self {
            shape: ColliderShape::Box(aabb),
            kind: SurfaceKind::Static,
            velocity: Vec2::ZERO,
        }
    }

    /// Box-shaped moving platform carrying the given velocity.
    #[must_use]
    pub fn moving_box(aabb: Aabb, velocity: Vec2) -> Self {
        Self {
            shape: ColliderShape::Box(aabb),
            kind: SurfaceKind::MovingPlatform,
            velocity,
        }
    }

    /// Static two-sided segment (ramps, sloped ground).
    #[must_use]
    pub fn static_segment(a: Vec2, b: Vec2) -> Self {
        Self {
            shape: ColliderShape::Segment { a, b },
            kind: SurfaceKind::Static,
            velocity: Vec2::ZERO,
        }
    }
}

/// Ordered collider list implementing [`RayCaster`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColliderWorld {
    colliders: Vec<Collider>,
}

impl ColliderWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colliders: Vec::new(),
        }
    }

    /// Adds a collider, rejecting degenerate geometry.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] for boxes without positive area or segments
    /// whose endpoints coincide.
    pub fn add(&mut self, collider: Collider) -> Result<(), WorldError> {
        match collider.shape {
            ColliderShape::Box(aabb) => {
                let size = aabb.size();
                if size.x <= 0.0 || size.y <= 0.0 {
                    return Err(WorldError::DegenerateBox {
                        width: size.x,
                        height: size.y,
                    });
                }
            }
            ColliderShape::Segment { a, b } => {
                if a == b {
                    return Err(WorldError::DegenerateSegment { point: a });
                }
            }
        }
        self.colliders.push(collider);
        Ok(())
    }

    /// Number of colliders in the world.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the world holds no colliders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// Iterate over the colliders in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Collider> {
        self.colliders.iter()
    }
}

impl RayCaster for ColliderWorld {
    fn cast(&self, ray: Ray, mask: SurfaceMask) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for collider in &self.colliders {
            if !mask.matches(collider.kind) {
                continue;
            }
            let hit = match collider.shape {
                ColliderShape::Box(aabb) => ray_vs_box(ray, &aabb),
                ColliderShape::Segment { a, b } => ray_vs_segment(ray, a, b),
            };
            if let Some((t, normal)) = hit {
                let closer = best.map_or(true, |b| t < b.distance);
                if closer {
                    best = Some(RayHit {
                        point: ray.at(t),
                        normal,
                        distance: t,
                        kind: collider.kind,
                        carried_velocity: collider.velocity,
                    });
                }
            }
        }
        best
    }
}

/// Interval of ray parameters inside one slab, or `None` when the ray is
/// parallel to the slab and starts outside it.
fn axis_slab(origin: f32, dir: f32, min: f32, max: f32) -> Option<(f32, f32)> {
    if dir.abs() < f32::EPSILON {
        if origin < min || origin > max {
            None
        } else {
            Some((f32::NEG_INFINITY, f32::INFINITY))
        }
    } else {
        let t0 = (min - origin) / dir;
        let t1 = (max - origin) / dir;
        Some(if t0 <= t1 { (t0, t1) } else { (t1, t0) })
    }
}

/// Slab-method intersection. Returns `(distance, normal)` of the entered
/// face. A ray starting inside the box reports a hit at distance zero with
/// the normal opposing the ray.
fn ray_vs_box(ray: Ray, aabb: &Aabb) -> Option<(f32, Vec2)> {
    let (tx_min, tx_max) = axis_slab(ray.origin.x, ray.direction.x, aabb.min.x, aabb.max.x)?;
    let (ty_min, ty_max) = axis_slab(ray.origin.y, ray.direction.y, aabb.min.y, aabb.max.y)?;

    let t_enter = tx_min.max(ty_min);
    let t_exit = tx_max.min(ty_max);
    if t_enter > t_exit || t_exit < 0.0 || t_enter > ray.max_distance {
        return None;
    }
    if t_enter < 0.0 {
        // Origin inside the box.
        return Some((0.0, -ray.direction));
    }
    let normal = if tx_min > ty_min {
        Vec2::new(-ray.direction.x.signum(), 0.0)
    } else {
        Vec2::new(0.0, -ray.direction.y.signum())
    };
    Some((t_enter, normal))
}

/// Parametric ray-vs-segment intersection. The segment is two-sided; the
/// reported normal is the perpendicular oriented against the ray.
fn ray_vs_segment(ray: Ray, a: Vec2, b: Vec2) -> Option<(f32, Vec2)> {
    let edge = b - a;
    let denom = ray.direction.perp_dot(edge);
    if denom.abs() < f32::EPSILON {
        // Parallel to the segment.
        return None;
    }
    let to_a = a - ray.origin;
    let t = to_a.perp_dot(edge) / denom;
    let s = to_a.perp_dot(ray.direction) / denom;
    if t < 0.0 || t > ray.max_distance || !(0.0..=1.0).contains(&s) {
        return None;
    }
    let mut normal = Vec2::new(-edge.y, edge.x).normalize();
    if normal.dot(ray.direction) > 0.0 {
        normal = -normal;
    }
    Some((t, normal))
}
