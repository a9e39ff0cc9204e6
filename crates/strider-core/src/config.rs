//! Movement tunables and their validation.
//!
//! Every constant that shapes the feel of the actor lives here: speeds,
//! sprint multiplier, jump arc parameters, probe ray counts and margins,
//! slope tolerance, and gravity. Nothing in the solver reads an embedded
//! literal; hosts construct a [`MovementConfig`], tweak fields, and pass it
//! to the solver, which validates it once at construction.
//!
//! Validation exists because two classes of bad values would otherwise fail
//! at runtime in confusing ways: a ray count below two divides by zero when
//! spacing rays across the box, and non-positive speeds or jump parameters
//! silently produce an actor that cannot move. Both are configuration
//! mistakes, so they are rejected up front with a [`ConfigError`].

use quarry::SurfaceMask;
use serde::{Deserialize, Serialize};

/// Errors raised by [`MovementConfig::validate`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// A probe ray count below the minimum of two.
    ///
    /// Ray spacing divides the inset box extent by `count - 1`; a single ray
    /// (or none) has no defined spacing.
    #[error("{axis} ray count must be at least 2, got {count}")]
    TooFewRays {
        /// Which ray set is misconfigured ("vertical" or "horizontal").
        axis: &'static str,
        /// The rejected count.
        count: usize,
    },
    /// A tunable that must be strictly positive.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A tunable that must not be negative.
    #[error("{name} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Actor geometry without positive extent on both axes.
    #[error("actor half-extents must be positive on both axes, got ({x}, {y})")]
    BadHalfExtents {
        /// Half-extent on x.
        x: f32,
        /// Half-extent on y.
        y: f32,
    },
}

/// Tunables for the movement solver.
///
/// Defaults are the values the movement feel was tuned around. Angles are
/// radians, distances world units, speeds world units per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Horizontal speed at full input deflection.
    pub max_speed: f32,
    /// Multiplier applied to `max_speed` while sprinting.
    pub sprint_boost: f32,
    /// Height a full jump aims to gain above its start.
    pub jump_height: f32,
    /// Constant upward speed while a jump is ascending.
    pub jump_speed: f32,
    /// Duration of a full-height jump press. Shapes minimum-jump arcs for
    /// callers implementing early release; the solver itself only carries it.
    pub full_jump_time: f32,
    /// Fraction of `full_jump_time` below which a press still yields the
    /// minimum jump. Caller-side arc shaping, like `full_jump_time`.
    pub min_jump_percent: f32,
    /// Number of downward/upward probe rays spread across the box width.
    pub vertical_rays: usize,
    /// Number of left/right probe rays spread across the box height.
    pub horizontal_rays: usize,
    /// Inset from the box corners when spacing probe rays, avoiding false
    /// positives at exact corners.
    pub ray_offset: f32,
    /// Maximum walkable slope angle in radians. Steeper surfaces classify
    /// as walls and never tilt the actor.
    pub max_slope: f32,
    /// Gravity acceleration, negative for downward.
    pub gravity: f32,
    /// Clamp magnitude for vertical velocity.
    pub max_vertical_speed: f32,
    /// Surface classes the probes collide with.
    pub obstacle_mask: SurfaceMask,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            sprint_boost: 3.0,
            jump_height: 5.0,
            jump_speed: 3.5,
            full_jump_time: 0.35,
            min_jump_percent: 0.4,
            vertical_rays: 5,
            horizontal_rays: 5,
            ray_offset: 0.05,
            max_slope: 45.0_f32.to_radians(),
            gravity: -30.0,
            max_vertical_speed: 20.0,
            obstacle_mask: SurfaceMask::ALL,
        }
    }
}

impl MovementConfig {
    /// Checks every tunable for values the solver cannot operate on.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: ray counts below two,
    /// non-positive speeds or jump parameters, or a negative ray offset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertical_rays < 2 {
            return Err(ConfigError::TooFewRays {
                axis: "vertical",
                count: self.vertical_rays,
            });
        }
        if self.horizontal_rays < 2 {
            return Err(ConfigError::TooFewRays {
                axis: "horizontal",
                count: self.horizontal_rays,
            });
        }
        for (name, value) in [
            ("max_speed", self.max_speed),
            ("sprint_boost", self.sprint_boost),
            ("jump_height", self.jump_height),
            ("jump_speed", self.jump_speed),
            ("full_jump_time", self.full_jump_time),
            ("min_jump_percent", self.min_jump_percent),
            ("max_slope", self.max_slope),
            ("max_vertical_speed", self.max_vertical_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.ray_offset < 0.0 {
            return Err(ConfigError::Negative {
                name: "ray_offset",
                value: self.ray_offset,
            });
        }
        Ok(())
    }
}
