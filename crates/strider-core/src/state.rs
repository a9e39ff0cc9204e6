//! Contact scratch state, jump state machine states, and facing.
//!
//! [`ContactState`] is rebuilt from scratch every frame; holding it across
//! frames was a stale-state hazard in earlier controller designs, so the
//! solver resets it at the top of each step and only the jump state, facing,
//! and previous-frame position survive between frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Which probe directions currently touch a surface.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ContactFlags: u8 {
        /// Ground contact under the actor.
        const BELOW = 1 << 0;
        /// Ceiling contact over the actor.
        const ABOVE = 1 << 1;
        /// Wall contact on the actor's left.
        const LEFT = 1 << 2;
        /// Wall contact on the actor's right.
        const RIGHT = 1 << 3;
    }
}

/// Per-frame contact classification.
///
/// Each bound is only meaningful while its flag is set; cleared bounds carry
/// infinity sentinels chosen so that "no contact" never wins the min/max
/// reductions that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactState {
    /// Contact flags for the four probe directions.
    pub flags: ContactFlags,
    /// Highest ground surface under the actor. Valid when `BELOW` is set.
    pub ground_y: f32,
    /// Lowest ceiling surface over the actor. Valid when `ABOVE` is set.
    pub ceiling_y: f32,
    /// Nearest wall face on the left. Valid when `LEFT` is set.
    pub left_wall_x: f32,
    /// Nearest wall face on the right. Valid when `RIGHT` is set.
    pub right_wall_x: f32,
}

impl Default for ContactState {
    fn default() -> Self {
        Self {
            flags: ContactFlags::empty(),
            ground_y: f32::NEG_INFINITY,
            ceiling_y: f32::INFINITY,
            left_wall_x: f32::NEG_INFINITY,
            right_wall_x: f32::INFINITY,
        }
    }
}

impl ContactState {
    /// Whether the actor touches ground.
    #[must_use]
    pub fn below(&self) -> bool {
        self.flags.contains(ContactFlags::BELOW)
    }

    /// Whether the actor touches a ceiling.
    #[must_use]
    pub fn above(&self) -> bool {
        self.flags.contains(ContactFlags::ABOVE)
    }

    /// Whether the actor touches a wall on its left.
    #[must_use]
    pub fn left(&self) -> bool {
        self.flags.contains(ContactFlags::LEFT)
    }

    /// Whether the actor touches a wall on its right.
    #[must_use]
    pub fn right(&self) -> bool {
        self.flags.contains(ContactFlags::RIGHT)
    }
}

/// State of the jump machine.
///
/// `Ascending` is only entered from `Grounded` via an explicit jump request
/// and always exits to `Falling` in the same frame its exit condition
/// (ceiling contact or apex reached) holds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum JumpState {
    /// Standing on ground.
    #[default]
    Grounded,
    /// Rising through an active jump at constant ascent speed.
    Ascending {
        /// Height of the actor when the jump started.
        start_height: f32,
        /// Apex the jump aims for: start height plus configured jump height.
        target_height: f32,
    },
    /// Airborne without an active jump; gravity applies.
    Falling,
}

impl JumpState {
    /// Whether the machine is in the ascending phase.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending { .. })
    }
}

/// Horizontal orientation of the actor's visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Facing toward negative x.
    Left,
    /// Facing toward positive x.
    #[default]
    Right,
}

impl Facing {
    /// Unit horizontal direction vector for this facing.
    #[must_use]
    pub fn direction(self) -> Vec2 {
        match self {
            Self::Left => Vec2::NEG_X,
            Self::Right => Vec2::X,
        }
    }

    /// Sign of the facing direction (-1 left, +1 right).
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}
