//! Direction policies: who decides where the actor wants to go.
//!
//! The solver never reads input devices. Once per frame, before collision
//! resolution, it asks a [`DirectionPolicy`] for a [`DirectionIntent`]:
//! the signed horizontal axis, the sprint flag, and the jump-request edge.
//! Hosts implement the trait for player input; the provided implementations
//! cover AI-style constant holds and recorded replays.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Desired movement for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DirectionIntent {
    /// Signed horizontal axis in `[-1, 1]`. Values within the dead-zone
    /// count as no input.
    pub horizontal: f32,
    /// Whether the sprint modifier is held.
    pub sprinting: bool,
    /// Jump-request edge: true only on the frame the jump was pressed.
    pub jump_pressed: bool,
}

impl DirectionIntent {
    /// Intent to walk toward positive x.
    #[must_use]
    pub fn walk_right() -> Self {
        Self {
            horizontal: 1.0,
            ..Self::default()
        }
    }

    /// Intent to walk toward negative x.
    #[must_use]
    pub fn walk_left() -> Self {
        Self {
            horizontal: -1.0,
            ..Self::default()
        }
    }

    /// Neutral intent: no input at all.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Per-frame source of movement intent.
pub trait DirectionPolicy {
    /// Decide the intent for the coming frame.
    fn decide(&mut self) -> DirectionIntent;
}

/// Policy holding one fixed intent forever (AI-style holds, soak tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantPolicy {
    intent: DirectionIntent,
}

impl ConstantPolicy {
    /// Creates a policy that always returns `intent`.
    #[must_use]
    pub fn new(intent: DirectionIntent) -> Self {
        Self { intent }
    }
}

impl DirectionPolicy for ConstantPolicy {
    fn decide(&mut self) -> DirectionIntent {
        self.intent
    }
}

/// Policy replaying a recorded intent sequence, then idling.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    frames: VecDeque<DirectionIntent>,
}

impl ScriptedPolicy {
    /// Creates a replay from a frame-ordered intent sequence.
    #[must_use]
    pub fn new<I: IntoIterator<Item = DirectionIntent>>(frames: I) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Frames left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl DirectionPolicy for ScriptedPolicy {
    fn decide(&mut self) -> DirectionIntent {
        self.frames.pop_front().unwrap_or_default()
    }
}
