//! The per-frame movement pipeline.
//!
//! [`MovementSolver::step`] runs the whole frame in a fixed order:
//!
//! 1. tunneling guard (swept ray along the last frame's displacement),
//! 2. ground probe, classification, and bottom snap,
//! 3. ceiling probe, jump-state reconciliation, and top snap,
//! 4. left then right wall probes and side snaps,
//! 5. slope sample and visual rotation,
//! 6. jump request handling,
//! 7. horizontal then vertical velocity resolution,
//! 8. integration close-out (vertical clamp, platform carry, death freeze).
//!
//! Position corrections are written to the body immediately, because later
//! probes in the same frame must read the corrected position. When the
//! tunneling guard fires it overrides the whole frame: velocity is zeroed,
//! the body is snapped against the obstacle, and no other probe or
//! resolution runs.
//!
//! The solver persists exactly five things across frames: the jump state,
//! the facing, the previous frame's position (for the sweep), the resolved
//! velocity (gravity accumulates in it), and the carried platform velocity.
//! Contact flags and bounds are scratch, rebuilt from zero every frame.

use glam::Vec2;
use quarry::RayCaster;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::body::KinematicBody;
use crate::classify::GroundClassifier;
use crate::config::{ConfigError, MovementConfig};
use crate::policy::{DirectionIntent, DirectionPolicy};
use crate::probe::CollisionProbe;
use crate::slope;
use crate::state::{ContactFlags, ContactState, Facing, JumpState};
use crate::velocity::VelocityResolver;

/// Everything the solver needs to know for one frame besides the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Movement intent decided by the direction policy.
    pub intent: DirectionIntent,
    /// Liveness: a dead actor loses horizontal control but keeps falling.
    pub alive: bool,
    /// Simulation timestep in seconds.
    pub dt: f32,
}

impl FrameInput {
    /// Input for a living actor.
    #[must_use]
    pub fn new(intent: DirectionIntent, dt: f32) -> Self {
        Self {
            intent,
            alive: true,
            dt,
        }
    }
}

/// What the solver hands back at the end of a frame.
///
/// The velocity and rotation are also written to the body; the rest are
/// signals for the host (animation mirroring, state queries, debugging).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Final velocity handed to the body, platform carry included.
    pub velocity: Vec2,
    /// Visual tilt handed to the body, radians.
    pub rotation: f32,
    /// Contact classification resolved this frame.
    pub contacts: ContactState,
    /// Jump machine state after this frame.
    pub jump: JumpState,
    /// Facing after this frame.
    pub facing: Facing,
    /// One-shot mirror event: facing changed this frame.
    pub facing_changed: bool,
    /// Whether the tunneling guard fired and overrode the frame.
    pub guard_fired: bool,
}

/// Kinematic movement solver for a single rectangular actor.
///
/// One solver instance owns one actor. All queries go through the
/// [`RayCaster`] handed to [`step`](Self::step); the solver never looks
/// anything up ambiently.
#[derive(Debug, Clone)]
pub struct MovementSolver {
    config: MovementConfig,
    velocity: Vec2,
    jump: JumpState,
    facing: Facing,
    rotation: f32,
    last_position: Vec2,
    platform_velocity: Vec2,
}

impl MovementSolver {
    /// Creates a solver for an actor currently at `body`'s position.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration fails validation.
    /// (Body geometry is validated by [`KinematicBody::new`].)
    pub fn new(config: MovementConfig, body: &KinematicBody) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            velocity: Vec2::ZERO,
            jump: JumpState::default(),
            facing: Facing::default(),
            rotation: 0.0,
            last_position: body.position,
            platform_velocity: Vec2::ZERO,
        })
    }

    /// The configuration the solver was built with.
    #[must_use]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Current jump machine state.
    #[must_use]
    pub fn jump(&self) -> JumpState {
        self.jump
    }

    /// Current facing.
    #[must_use]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Velocity carried from the platform underfoot (or last stood on).
    #[must_use]
    pub fn carried_velocity(&self) -> Vec2 {
        self.platform_velocity
    }

    /// Early jump release: forces an ascending jump into `Falling`.
    ///
    /// This is the same transition the apex and ceiling exits take; callers
    /// implementing minimum-jump arcs invoke it when the jump button is
    /// released early. Does nothing unless ascending.
    pub fn cut_jump(&mut self) {
        if self.jump.is_ascending() {
            debug!(state = ?self.jump, "jump cut short");
            self.jump = JumpState::Falling;
        }
    }

    /// Asks a policy for this frame's intent, then steps.
    pub fn step_with_policy<W: RayCaster, P: DirectionPolicy>(
        &mut self,
        body: &mut KinematicBody,
        world: &W,
        policy: &mut P,
        alive: bool,
        dt: f32,
    ) -> FrameOutput {
        let intent = policy.decide();
        self.step(
            body,
            world,
            &FrameInput { intent, alive, dt },
        )
    }

    /// Runs one frame of the movement pipeline.
    pub fn step<W: RayCaster>(
        &mut self,
        body: &mut KinematicBody,
        world: &W,
        input: &FrameInput,
    ) -> FrameOutput {
        let probe = CollisionProbe::new(&self.config);
        let classifier = GroundClassifier::new(&self.config);
        let resolver = VelocityResolver::new(&self.config);
        let mut contacts = ContactState::default();

        // Tunneling guard: a hit along the last displacement overrides the
        // whole frame.
        if let Some(hit) = probe.sweep(world, self.last_position, body.position) {
            let direction = (body.position - self.last_position).normalize();
            body.position = hit.point - body.half_extents * direction;
            self.velocity = Vec2::ZERO;
            body.velocity = Vec2::ZERO;
            body.rotation = self.rotation;
            self.last_position = body.position;
            debug!(point = ?hit.point, "tunneling guard fired");
            return FrameOutput {
                velocity: Vec2::ZERO,
                rotation: self.rotation,
                contacts,
                jump: self.jump,
                facing: self.facing,
                facing_changed: false,
                guard_fired: true,
            };
        }

        // Ground: highest surface wins, bottom edge snaps onto it.
        let ground_hits = probe.cast_all(world, &probe.ground_rays(&body.bounds()));
        if let Some(ground) = classifier.resolve_ground(&ground_hits) {
            contacts.flags |= ContactFlags::BELOW;
            contacts.ground_y = ground.height;
            body.snap_bottom_to(ground.height);
            // Standing on static ground clears the platform carry; no
            // ground contact at all retains it until the next landing.
            self.platform_velocity = ground.platform_velocity.unwrap_or(Vec2::ZERO);
        }

        // Ceiling, from the ground-corrected position.
        let ceiling_hits = probe.cast_all(world, &probe.ceiling_rays(&body.bounds()));
        if let Some(ceiling_y) = classifier.resolve_ceiling(&ceiling_hits) {
            contacts.flags |= ContactFlags::ABOVE;
            contacts.ceiling_y = ceiling_y;
        }

        let reconciled = classifier.reconcile_jump(self.jump, contacts.below());
        if reconciled != self.jump {
            debug!(from = ?self.jump, to = ?reconciled, "jump state reconciled");
        }
        self.jump = reconciled;

        if contacts.above() {
            body.snap_top_to(contacts.ceiling_y);
        }

        // Walls, left then right, each from the already-corrected position.
        let left_hits = probe.cast_all(world, &probe.left_rays(&body.bounds()));
        if let Some(x) = classifier.resolve_left_wall(&left_hits) {
            contacts.flags |= ContactFlags::LEFT;
            contacts.left_wall_x = x;
            body.snap_left_to(x);
        }
        let right_hits = probe.cast_all(world, &probe.right_rays(&body.bounds()));
        if let Some(x) = classifier.resolve_right_wall(&right_hits) {
            contacts.flags |= ContactFlags::RIGHT;
            contacts.right_wall_x = x;
            body.snap_right_to(x);
        }
        trace!(flags = ?contacts.flags, "contacts resolved");

        // Cosmetic tilt from the slope sample.
        let sample = probe.slope_sample(world, &body.bounds());
        self.rotation = slope::resolve_rotation(sample.as_ref(), self.config.max_slope);

        // Jump request against this frame's fresh ground contact.
        if input.intent.jump_pressed {
            let next = resolver.request_jump(self.jump, contacts.below(), body.position.y);
            if next != self.jump {
                debug!(state = ?next, "jump started");
            }
            self.jump = next;
        }

        // Horizontal control, suppressed while dead.
        let mut facing_changed = false;
        if input.alive {
            let outcome = resolver.horizontal(
                input.intent.horizontal,
                input.intent.sprinting,
                &contacts,
                self.facing,
            );
            self.velocity.x = outcome.speed;
            self.facing = outcome.facing;
            facing_changed = outcome.flipped;
        }

        // Vertical: jump machine or gravity.
        let (vy, next_jump) = resolver.vertical(
            self.jump,
            &contacts,
            body.position.y,
            self.velocity.y,
            input.dt,
        );
        if next_jump != self.jump {
            debug!(from = ?self.jump, to = ?next_jump, "jump state transition");
        }
        self.jump = next_jump;
        self.velocity.y = vy;

        // Integration close-out.
        self.velocity.y = self
            .velocity
            .y
            .clamp(-self.config.max_vertical_speed, self.config.max_vertical_speed);
        if !input.alive {
            self.velocity.x = 0.0;
        }
        let final_velocity = self.velocity + self.platform_velocity;
        body.velocity = final_velocity;
        body.rotation = self.rotation;
        self.last_position = body.position;

        FrameOutput {
            velocity: final_velocity,
            rotation: self.rotation,
            contacts,
            jump: self.jump,
            facing: self.facing,
            facing_changed,
            guard_fired: false,
        }
    }
}
