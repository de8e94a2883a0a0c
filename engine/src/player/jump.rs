//! Jump and vertical kinematics.
//!
//! Owns vertical velocity and the ground flag, and decides when a jump fires.
//! A jump fires only when all three timing checks pass on the same frame:
//!
//! - **buffer**: the last press happened at most `jump_buffer_window` ago, so a
//!   press slightly before landing still counts once grounded
//! - **coyote**: grounded, or grounded at most `coyote_time_window` ago
//! - **cooldown**: at least `jump_cooldown` since the previous jump
//!
//! None of the checks implies another; the cooldown in particular is what keeps
//! a buffered press and the coyote window from chaining into a double jump.
//!
//! Per frame, in this order: trigger check, gravity, integration, ground
//! collision, ceiling clamp.

use super::config::ControllerConfig;
use crate::time::NEVER;

/// Ground/air phase of the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    Airborne,
}

/// Result of one vertical step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    /// New vertical position, always within `[ground_y, max_y]`.
    pub y: f32,
    /// A jump fired this frame.
    pub jumped: bool,
    /// The rig touched down this frame after being airborne.
    pub landed: bool,
}

/// Vertical state and jump policy.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpStateMachine {
    /// Current vertical velocity in m/s (positive = upward)
    vertical_velocity: f32,
    on_ground: bool,
    /// Clock times in seconds; [`NEVER`] when the event has not happened.
    last_grounded_time: f64,
    last_jump_pressed_time: f64,
    last_jump_time: f64,
}

impl Default for JumpStateMachine {
    fn default() -> Self {
        Self {
            vertical_velocity: 0.0,
            on_ground: true,
            last_grounded_time: NEVER,
            last_jump_pressed_time: NEVER,
            last_jump_time: NEVER,
        }
    }
}

impl JumpStateMachine {
    /// Create a grounded state machine with no jump history.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.on_ground
    }

    pub fn phase(&self) -> JumpPhase {
        if self.on_ground {
            JumpPhase::Grounded
        } else {
            JumpPhase::Airborne
        }
    }

    pub fn last_grounded_time(&self) -> f64 {
        self.last_grounded_time
    }

    pub fn last_jump_pressed_time(&self) -> f64 {
        self.last_jump_pressed_time
    }

    pub fn last_jump_time(&self) -> f64 {
        self.last_jump_time
    }

    /// Remember a jump key press. Only the most recent press is kept; it stays
    /// pending until a jump consumes it or the buffer window runs out.
    pub fn record_jump_press(&mut self, at: f64) {
        if at.is_finite() && at > self.last_jump_pressed_time {
            self.last_jump_pressed_time = at;
        }
    }

    /// Mark the rig as airborne without touching the jump history, e.g. after it
    /// was moved above the ground. Coyote time counts from the last grounded frame.
    pub fn set_airborne(&mut self) {
        self.on_ground = false;
    }

    /// Whether a jump would fire at `now`.
    pub fn can_trigger(&self, now: f64, config: &ControllerConfig) -> bool {
        let within_buffer = now - self.last_jump_pressed_time <= f64::from(config.jump_buffer_window);
        let within_coyote =
            self.on_ground || now - self.last_grounded_time <= f64::from(config.coyote_time_window);
        let cooldown_ready = now - self.last_jump_time >= f64::from(config.jump_cooldown);
        within_buffer && within_coyote && cooldown_ready
    }

    /// Advance one frame from vertical position `y`.
    ///
    /// `dt` must already be sanitized (finite, `>= 0`).
    pub fn step(&mut self, now: f64, dt: f32, y: f32, config: &ControllerConfig) -> VerticalStep {
        let was_grounded = self.on_ground;

        // 1. Jump trigger
        let jumped = self.can_trigger(now, config);
        if jumped {
            self.vertical_velocity = config.jump_strength;
            self.on_ground = false;
            self.last_jump_time = now;
            self.last_jump_pressed_time = NEVER;
            log::debug!("jump at t={now:.3}s, v={:.2}", self.vertical_velocity);
        }

        // 2. Gravity, floored at terminal velocity
        self.vertical_velocity =
            (self.vertical_velocity + config.gravity * dt).max(config.terminal_velocity);

        // 3. Integrate
        let mut y = y + self.vertical_velocity * dt;

        // 4. Ground collision. Only a rig that is not moving up can settle, so a
        // jump fired on a zero-length frame still leaves the ground.
        if y <= config.ground_y && self.vertical_velocity <= 0.0 {
            y = config.ground_y;
            self.on_ground = true;
            self.last_grounded_time = now;
            self.vertical_velocity = 0.0;
        } else {
            y = y.max(config.ground_y);
            self.on_ground = false;
        }

        // 5. Ceiling
        if y > config.max_y {
            y = config.max_y;
            if self.vertical_velocity > 0.0 {
                self.vertical_velocity = 0.0;
            }
        }

        let landed = self.on_ground && !was_grounded;
        if landed {
            log::debug!("landed at t={now:.3}s");
        }

        VerticalStep { y, jumped, landed }
    }

    /// Forget all motion and history; the rig stands on the ground.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
