//! Reduction of raw probe hits into contact classification.
//!
//! Each ray set collapses to one boolean and one extremal bound:
//!
//! - ground: any hit, bound = **maximum** hit y (the closest surface seen
//!   from below),
//! - ceiling: any hit, bound = **minimum** hit y,
//! - walls: hits first filter by surface steepness (a surface whose normal
//!   leans further from up than the max slope is a wall; anything shallower
//!   is walkable ground even when a horizontal ray struck it), then reduce
//!   to **maximum** x on the left and **minimum** x on the right. Both wall
//!   bounds compare by the hit's x so a nearer-but-lower wall can never
//!   lose to a farther one.
//!
//! Ground hits additionally resolve the moving-platform carry: standing on
//! a platform adopts its velocity, standing on static ground clears it.

use glam::Vec2;
use quarry::{RayHit, SurfaceKind};

use crate::config::MovementConfig;
use crate::state::JumpState;

/// Resolved ground contact for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    /// Height of the highest ground surface hit.
    pub height: f32,
    /// Velocity of the platform underfoot, or `None` when the ground is
    /// static (which clears any carried velocity).
    pub platform_velocity: Option<Vec2>,
}

/// Collapses probe hit sets into contact flags and bounds.
#[derive(Debug, Clone, Copy)]
pub struct GroundClassifier<'a> {
    config: &'a MovementConfig,
}

impl<'a> GroundClassifier<'a> {
    /// Creates a classifier reading the slope threshold from `config`.
    #[must_use]
    pub fn new(config: &'a MovementConfig) -> Self {
        Self { config }
    }

    /// Reduces ground-ray hits. `None` means no ground contact.
    #[must_use]
    pub fn resolve_ground(&self, hits: &[RayHit]) -> Option<GroundContact> {
        if hits.is_empty() {
            return None;
        }
        let mut height = f32::NEG_INFINITY;
        let mut platform_velocity = None;
        for hit in hits {
            if hit.point.y > height {
                height = hit.point.y;
            }
            if platform_velocity.is_none() && hit.kind == SurfaceKind::MovingPlatform {
                platform_velocity = Some(hit.carried_velocity);
            }
        }
        Some(GroundContact {
            height,
            platform_velocity,
        })
    }

    /// Reduces ceiling-ray hits to the lowest ceiling height.
    #[must_use]
    pub fn resolve_ceiling(&self, hits: &[RayHit]) -> Option<f32> {
        hits.iter()
            .map(|hit| hit.point.y)
            .fold(None, |acc, y| Some(acc.map_or(y, |a: f32| a.min(y))))
    }

    /// Reduces left-ray hits to the nearest wall face on the left.
    ///
    /// Only hits steeper than the max slope qualify; the bound is the
    /// maximum hit x.
    #[must_use]
    pub fn resolve_left_wall(&self, hits: &[RayHit]) -> Option<f32> {
        self.wall_hits(hits)
            .fold(None, |acc, x| Some(acc.map_or(x, |a: f32| a.max(x))))
    }

    /// Reduces right-ray hits to the nearest wall face on the right.
    ///
    /// Only hits steeper than the max slope qualify; the bound is the
    /// minimum hit x.
    #[must_use]
    pub fn resolve_right_wall(&self, hits: &[RayHit]) -> Option<f32> {
        self.wall_hits(hits)
            .fold(None, |acc, x| Some(acc.map_or(x, |a: f32| a.min(x))))
    }

    /// Frame reconciliation of the jump machine with ground contact.
    ///
    /// An ascending jump is never forced back by classification; its exits
    /// live in vertical velocity resolution. Otherwise the machine simply
    /// mirrors ground contact.
    #[must_use]
    pub fn reconcile_jump(&self, state: JumpState, below: bool) -> JumpState {
        if state.is_ascending() {
            state
        } else if below {
            JumpState::Grounded
        } else {
            JumpState::Falling
        }
    }

    fn wall_hits<'h>(&self, hits: &'h [RayHit]) -> impl Iterator<Item = f32> + 'h {
        let max_slope = self.config.max_slope;
        hits.iter()
            .filter(move |hit| angle_from_up(hit.normal).abs() > max_slope)
            .map(|hit| hit.point.x)
    }
}

/// Signed angle in radians from the up axis to `normal`, positive
/// counter-clockwise.
#[must_use]
pub(crate) fn angle_from_up(normal: Vec2) -> f32 {
    Vec2::Y.perp_dot(normal).atan2(Vec2::Y.dot(normal))
}
