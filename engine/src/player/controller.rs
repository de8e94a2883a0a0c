//! First-Person Controller
//!
//! Owns the rig's movement state and advances it once per rendered frame from an
//! [`InputSnapshot`]. Per frame, in this order:
//!
//! 1. look (pointer delta into yaw/pitch)
//! 2. crouch level (speed multiplier for this frame)
//! 3. horizontal locomotion and bounds clamp
//! 4. jump trigger, gravity, ground and ceiling
//! 5. stance height blend
//!
//! The controller reads time from an injected [`Clock`] and never touches
//! platform or rendering state.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cube_range_engine::player::{ControllerConfig, FirstPersonController};
//! use cube_range_engine::time::MonotonicClock;
//!
//! let mut controller = FirstPersonController::new(ControllerConfig::default(), MonotonicClock::new());
//!
//! // Each frame:
//! let transform = controller.update(delta_time, &collector.snapshot());
//! camera.set_eye(transform.eye_position(), transform.forward());
//! ```

use glam::{Vec2, Vec3};

use super::config::{ConfigError, ControllerConfig};
use super::crouch::CrouchModifier;
use super::jump::JumpStateMachine;
use super::locomotion::HorizontalLocomotion;
use super::state::{MovementState, Transform};
use crate::camera::LookRig;
use crate::input::InputSnapshot;
use crate::time::{Clock, NEVER};

/// First-person rig controller.
#[derive(Debug, Clone)]
pub struct FirstPersonController<C: Clock> {
    config: ControllerConfig,
    clock: C,

    look: LookRig,
    locomotion: HorizontalLocomotion,
    jump: JumpStateMachine,
    crouch: CrouchModifier,

    /// Rig position (feet)
    position: Vec3,

    /// Latest time seen; the clock is never allowed to run backwards
    last_now: f64,
}

impl<C: Clock> FirstPersonController<C> {
    /// Create a controller standing at the origin on the ground plane, facing -Z.
    ///
    /// The config is used as given; see [`Self::try_new`] for a validating constructor.
    pub fn new(config: ControllerConfig, clock: C) -> Self {
        Self::with_spawn(config, clock, Vec3::ZERO, 0.0)
    }

    /// Like [`Self::new`], but rejects an invalid config.
    pub fn try_new(config: ControllerConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, clock))
    }

    /// Create a controller at `position` facing `yaw`.
    pub fn with_spawn(config: ControllerConfig, clock: C, position: Vec3, yaw: f32) -> Self {
        let look = LookRig::with_orientation(config.sensitivity, yaw, 0.0);
        let mut controller = Self {
            config,
            clock,
            look,
            locomotion: HorizontalLocomotion::new(),
            jump: JumpStateMachine::new(),
            crouch: CrouchModifier::new(),
            position: Vec3::ZERO,
            last_now: NEVER,
        };
        controller.place(position);
        controller
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn look(&self) -> &LookRig {
        &self.look
    }

    pub fn jump(&self) -> &JumpStateMachine {
        &self.jump
    }

    pub fn crouch(&self) -> &CrouchModifier {
        &self.crouch
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Settings-slider multiplier on the configured look sensitivity.
    pub fn set_sensitivity_scale(&mut self, scale: f32) {
        self.look.set_sensitivity_scale(scale);
    }

    /// Advance one frame at the clock's current time.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot) -> Transform {
        let now = self.clock.now();
        self.update_at(now, dt, input)
    }

    /// Advance one frame at an explicit time `now` (seconds on the input clock).
    ///
    /// A `dt` that is negative or not finite is treated as zero. A `now` earlier
    /// than a previous call is raised to the previous value.
    pub fn update_at(&mut self, now: f64, dt: f32, input: &InputSnapshot) -> Transform {
        let dt = sanitize_dt(dt);
        let now = if now.is_finite() { now.max(self.last_now) } else { self.last_now };
        self.last_now = now;

        if let Some(pressed_at) = input.jump_pressed_at {
            self.jump.record_jump_press(pressed_at);
        }

        self.look.apply_look(input.look_delta.x, input.look_delta.y);

        self.crouch.set_held(input.crouch);
        let speed_multiplier = self.crouch.speed_multiplier(self.jump.is_grounded(), &self.config);

        self.position = self.locomotion.integrate(
            dt,
            &input.movement,
            self.look.yaw(),
            speed_multiplier,
            self.position,
            &self.config,
        );

        let vertical = self.jump.step(now, dt, self.position.y, &self.config);
        self.position.y = vertical.y;
        if vertical.jumped {
            self.crouch.clear();
        }

        self.crouch.blend(dt, &self.config);

        self.transform()
    }

    /// Current rig pose.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            yaw: self.look.yaw(),
            pitch: self.look.pitch(),
            stance_height: self.crouch.stance_height(),
        }
    }

    /// Snapshot of the full movement state.
    pub fn state(&self) -> MovementState {
        let velocity = self.locomotion.velocity();
        MovementState {
            position: self.position,
            yaw: self.look.yaw(),
            pitch: self.look.pitch(),
            horizontal_velocity: Vec2::new(velocity.x, velocity.z),
            vertical_velocity: self.jump.vertical_velocity(),
            on_ground: self.jump.is_grounded(),
            crouching: self.crouch.is_crouching(),
            stance_height: self.crouch.stance_height(),
            last_grounded_time: self.jump.last_grounded_time(),
            last_jump_pressed_time: self.jump.last_jump_pressed_time(),
            last_jump_time: self.jump.last_jump_time(),
        }
    }

    /// Put the rig back at a spawn point: no motion, standing, no jump history.
    ///
    /// The sensitivity scale survives.
    pub fn reset(&mut self, position: Vec3, yaw: f32) {
        self.look.set_orientation(yaw, 0.0);
        self.locomotion.reset();
        self.jump.reset();
        self.crouch.reset();
        self.place(position);
    }

    /// Move the rig, keeping orientation and velocities. The position is
    /// clamped into the play volume; above the ground the rig starts falling.
    pub fn teleport(&mut self, position: Vec3) {
        self.place(position);
    }

    fn place(&mut self, position: Vec3) {
        let position = if position.is_finite() { position } else { self.position };
        let (x, z) = self.config.bounds.clamp(position.x, position.z);
        // max/min rather than clamp: an unvalidated config may have ground_y > max_y.
        let y = position.y.max(self.config.ground_y).min(self.config.max_y);
        self.position = Vec3::new(x, y, z);

        if y > self.config.ground_y {
            self.jump.set_airborne();
        }
    }
}

/// Frame time the integrators may use: finite and non-negative.
fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("ignoring invalid frame time {dt}");
        0.0
    }
}
