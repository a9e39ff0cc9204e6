//! Velocity resolution: horizontal input shaping and the vertical jump
//! state machine.
//!
//! Horizontal speed comes straight from the input axis, gated by the wall
//! contact on the side being pushed toward and scaled by the sprint boost.
//! Vertical speed is either gravity integration (airborne) or the jump
//! machine: ascent is velocity-controlled at a constant `jump_speed` rather
//! than force-controlled, so the jump arc is predictable independent of
//! frame rate, and it exits to `Falling` the same frame a ceiling hit or
//! the target apex is detected.

use crate::config::MovementConfig;
use crate::state::{ContactState, Facing, JumpState};

/// Half-width of the input dead-zone; axis values within it count as no
/// input and never change facing.
pub const INPUT_DEAD_ZONE: f32 = 0.01;

/// Result of horizontal resolution for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalOutcome {
    /// Resolved horizontal velocity.
    pub speed: f32,
    /// Facing after this frame.
    pub facing: Facing,
    /// Whether facing changed this frame (one-shot mirror event).
    pub flipped: bool,
}

/// Resolves per-frame velocity from input, contacts, and the jump machine.
#[derive(Debug, Clone, Copy)]
pub struct VelocityResolver<'a> {
    config: &'a MovementConfig,
}

impl<'a> VelocityResolver<'a> {
    /// Creates a resolver reading speeds and jump tunables from `config`.
    #[must_use]
    pub fn new(config: &'a MovementConfig) -> Self {
        Self { config }
    }

    /// Resolves horizontal velocity and facing from the input axis.
    #[must_use]
    pub fn horizontal(
        &self,
        h: f32,
        sprinting: bool,
        contacts: &ContactState,
        facing: Facing,
    ) -> HorizontalOutcome {
        if h < -INPUT_DEAD_ZONE {
            HorizontalOutcome {
                speed: self.input_speed(h, sprinting, contacts.left()),
                facing: Facing::Left,
                flipped: facing == Facing::Right,
            }
        } else if h > INPUT_DEAD_ZONE {
            HorizontalOutcome {
                speed: self.input_speed(h, sprinting, contacts.right()),
                facing: Facing::Right,
                flipped: facing == Facing::Left,
            }
        } else {
            HorizontalOutcome {
                speed: 0.0,
                facing,
                flipped: false,
            }
        }
    }

    /// Advances the jump machine and resolves vertical velocity.
    ///
    /// `height` is the actor's current center height, `vy` the vertical
    /// velocity carried in from the previous frame. Returns the new vertical
    /// velocity and jump state.
    #[must_use]
    pub fn vertical(
        &self,
        state: JumpState,
        contacts: &ContactState,
        height: f32,
        vy: f32,
        dt: f32,
    ) -> (f32, JumpState) {
        match state {
            JumpState::Ascending { target_height, .. } => {
                if contacts.above() || height >= target_height {
                    // Exit this frame; velocity is not forced upward again.
                    (vy, JumpState::Falling)
                } else {
                    (self.config.jump_speed, state)
                }
            }
            JumpState::Grounded | JumpState::Falling => {
                if contacts.below() {
                    // Ground snapping already fixed the position.
                    (vy, state)
                } else {
                    (vy + self.config.gravity * dt, state)
                }
            }
        }
    }

    /// Handles an explicit jump request.
    ///
    /// Only a grounded actor with ground contact starts ascending; the new
    /// state records the start height and the apex it aims for.
    #[must_use]
    pub fn request_jump(&self, state: JumpState, below: bool, height: f32) -> JumpState {
        if state == JumpState::Grounded && below {
            JumpState::Ascending {
                start_height: height,
                target_height: height + self.config.jump_height,
            }
        } else {
            state
        }
    }

    fn input_speed(&self, h: f32, sprinting: bool, blocked: bool) -> f32 {
        if blocked {
            0.0
        } else if sprinting {
            h * self.config.max_speed * self.config.sprint_boost
        } else {
            h * self.config.max_speed
        }
    }
}
