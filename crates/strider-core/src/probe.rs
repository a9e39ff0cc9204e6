//! Probe ray construction and execution.
//!
//! The probe owns the five query shapes the solver issues each frame:
//!
//! - a single swept ray along the last frame's displacement (the tunneling
//!   guard),
//! - N downward ground rays and N upward ceiling rays spread across the box
//!   width,
//! - N left and N right rays spread across the box height,
//! - one long downward slope-sample ray from the box center.
//!
//! Directional rays originate on the box center line and extend half the
//! box extent, terminating exactly at the box edge; they therefore detect
//! surfaces the box is already touching or penetrating, which is what the
//! snap-out correction in the classifier relies on. Ray endpoints are inset
//! from the corners by the configured margin so a surface flush with a
//! corner does not register on two perpendicular probe sets at once.

use glam::Vec2;
use quarry::{Aabb, Ray, RayCaster, RayHit};

use crate::config::MovementConfig;

/// Builds and executes the solver's per-frame ray queries.
#[derive(Debug, Clone, Copy)]
pub struct CollisionProbe<'a> {
    config: &'a MovementConfig,
}

impl<'a> CollisionProbe<'a> {
    /// Creates a probe reading ray counts, margins, and masks from `config`.
    #[must_use]
    pub fn new(config: &'a MovementConfig) -> Self {
        Self { config }
    }

    /// Casts the tunneling-guard sweep from `from` to `to`.
    ///
    /// Returns `None` for a zero displacement (the sweep is skipped
    /// entirely) or when nothing lies along the displacement.
    pub fn sweep<W: RayCaster>(&self, world: &W, from: Vec2, to: Vec2) -> Option<RayHit> {
        let displacement = to - from;
        let distance = displacement.length();
        if distance <= 0.0 {
            return None;
        }
        world.cast(
            Ray::new(from, displacement, distance),
            self.config.obstacle_mask,
        )
    }

    /// Downward ground rays for the given box.
    #[must_use]
    pub fn ground_rays(&self, bounds: &Aabb) -> Vec<Ray> {
        self.vertical_rays(bounds, Vec2::NEG_Y)
    }

    /// Upward ceiling rays for the given box.
    #[must_use]
    pub fn ceiling_rays(&self, bounds: &Aabb) -> Vec<Ray> {
        self.vertical_rays(bounds, Vec2::Y)
    }

    /// Leftward wall rays for the given box.
    #[must_use]
    pub fn left_rays(&self, bounds: &Aabb) -> Vec<Ray> {
        self.horizontal_rays(bounds, Vec2::NEG_X)
    }

    /// Rightward wall rays for the given box.
    #[must_use]
    pub fn right_rays(&self, bounds: &Aabb) -> Vec<Ray> {
        self.horizontal_rays(bounds, Vec2::X)
    }

    /// One long downward probe from the box center, used only for the
    /// cosmetic slope tilt. Twice the reach of the ground rays, so the tilt
    /// keeps tracking the surface over small bumps that break ground
    /// contact for a frame.
    pub fn slope_sample<W: RayCaster>(&self, world: &W, bounds: &Aabb) -> Option<RayHit> {
        world.cast(
            Ray::new(bounds.center(), Vec2::NEG_Y, bounds.size().y),
            self.config.obstacle_mask,
        )
    }

    /// Casts a prebuilt ray set, keeping the hits in ray order.
    pub fn cast_all<W: RayCaster>(&self, world: &W, rays: &[Ray]) -> Vec<RayHit> {
        rays.iter()
            .filter_map(|ray| world.cast(*ray, self.config.obstacle_mask))
            .collect()
    }

    fn vertical_rays(&self, bounds: &Aabb, direction: Vec2) -> Vec<Ray> {
        let count = self.config.vertical_rays;
        let reach = bounds.half().y;
        spread(bounds.min.x, bounds.size().x, count, self.config.ray_offset)
            .map(|x| Ray::new(Vec2::new(x, bounds.center().y), direction, reach))
            .collect()
    }

    fn horizontal_rays(&self, bounds: &Aabb, direction: Vec2) -> Vec<Ray> {
        let count = self.config.horizontal_rays;
        let reach = bounds.half().x;
        spread(bounds.min.y, bounds.size().y, count, self.config.ray_offset)
            .map(|y| Ray::new(Vec2::new(bounds.center().x, y), direction, reach))
            .collect()
    }
}

/// Evenly spaced positions across an extent, inset by the corner margin:
/// `min + offset + i * (extent - 2*offset) / (count - 1)`.
///
/// `count >= 2` is enforced by configuration validation.
#[allow(clippy::cast_precision_loss)]
fn spread(min: f32, extent: f32, count: usize, offset: f32) -> impl Iterator<Item = f32> {
    let step = (extent - 2.0 * offset) / (count - 1) as f32;
    (0..count).map(move |i| min + offset + i as f32 * step)
}
