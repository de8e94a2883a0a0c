//! Planar Locomotion
//!
//! Turns held movement keys into a smoothed horizontal velocity and moves the rig
//! inside the rectangular play area. Movement is relative to the rig's yaw:
//! - forward/back moves along the look direction projected on the floor
//! - left/right strafes perpendicular to it
//!
//! # Smoothing
//!
//! Each update closes a fixed fraction (`acceleration`) of the gap between the
//! current and target velocity. In [`SmoothingMode::TimeAware`] the velocity is
//! then decayed by `damping^dt`, which makes deceleration frame-rate independent
//! (acceleration stays per-update). [`SmoothingMode::FixedFraction`] skips the
//! decay.
//!
//! ```rust,ignore
//! let position = locomotion.integrate(dt, &snapshot.movement, yaw, multiplier, position, &config);
//! ```

use glam::{Quat, Vec3};

use super::config::{ControllerConfig, SmoothingMode};
use crate::input::MovementKeys;

/// Horizontal velocity state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorizontalLocomotion {
    /// World-space planar velocity (m/s); `y` is always zero.
    velocity: Vec3,
}

impl HorizontalLocomotion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current planar velocity; `y` is always zero.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current planar speed.
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Overwrite the planar velocity (the vertical component is dropped).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = Vec3::new(velocity.x, 0.0, velocity.z);
    }

    pub fn reset(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// Advance one frame and return the new rig position.
    ///
    /// `dt` must already be sanitized (finite, `>= 0`). With `dt == 0` the
    /// velocity is left alone and only the bounds clamp runs.
    pub fn integrate(
        &mut self,
        dt: f32,
        keys: &MovementKeys,
        yaw: f32,
        speed_multiplier: f32,
        position: Vec3,
        config: &ControllerConfig,
    ) -> Vec3 {
        let mut position = position;

        if dt > 0.0 {
            let direction = wish_direction(keys, yaw);
            let target = direction * (config.move_speed * speed_multiplier);

            self.velocity = self.velocity.lerp(target, config.acceleration);
            if config.smoothing == SmoothingMode::TimeAware {
                self.velocity *= config.damping.powf(dt);
            }
            self.velocity.y = 0.0;

            position += self.velocity * dt;
        }

        let (x, z) = config.bounds.clamp(position.x, position.z);
        Vec3::new(x, position.y, z)
    }
}

/// Unit world-space movement direction for the held keys at `yaw`, or zero when
/// nothing (or only opposing keys) is held.
pub fn wish_direction(keys: &MovementKeys, yaw: f32) -> Vec3 {
    // Rig-local frame: forward is -Z, right is +X.
    let local = Vec3::new(keys.right_axis() as f32, 0.0, -(keys.forward_axis() as f32));
    let local = local.normalize_or_zero();

    let mut world = Quat::from_rotation_y(yaw) * local;
    world.y = 0.0;
    world.normalize_or_zero()
}
