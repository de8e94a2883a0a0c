//! First-person look rig.
//!
//! Pointer motion directly rotates a yaw/pitch pair, no smoothing:
//! - yaw is unbounded and wraps naturally
//! - pitch is clamped to ±90° every call
//! - moving the pointer right turns right (yaw decreases, counter-clockwise positive)
//! - moving the pointer down looks down
//!
//! Sensitivity is `base_sensitivity × sensitivity_scale`; the scale is what the
//! settings slider drives.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

/// Lowest allowed pitch (straight down).
pub const PITCH_MIN: f32 = -FRAC_PI_2;
/// Highest allowed pitch (straight up).
pub const PITCH_MAX: f32 = FRAC_PI_2;

/// Range accepted by [`LookRig::set_sensitivity_scale`].
pub const SENSITIVITY_SCALE_RANGE: (f32, f32) = (0.05, 10.0);

/// Yaw/pitch orientation driven by pointer deltas.
#[derive(Clone, Debug, PartialEq)]
pub struct LookRig {
    /// Horizontal angle (radians) around +Y. 0 looks toward -Z.
    yaw: f32,
    /// Vertical angle (radians), positive up.
    pitch: f32,
    /// Radians per device unit at scale 1.0.
    base_sensitivity: f32,
    sensitivity_scale: f32,
}

impl LookRig {
    pub fn new(base_sensitivity: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            base_sensitivity,
            sensitivity_scale: 1.0,
        }
    }

    /// Rig with a starting orientation. Pitch is clamped.
    pub fn with_orientation(base_sensitivity: f32, yaw: f32, pitch: f32) -> Self {
        let mut rig = Self::new(base_sensitivity);
        rig.set_orientation(yaw, pitch);
        rig
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Effective radians per device unit.
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.base_sensitivity * self.sensitivity_scale
    }

    #[inline]
    pub fn sensitivity_scale(&self) -> f32 {
        self.sensitivity_scale
    }

    /// Set the user sensitivity multiplier (the settings slider value).
    ///
    /// Clamped to [`SENSITIVITY_SCALE_RANGE`]; non-finite input is ignored.
    pub fn set_sensitivity_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            return;
        }
        let (lo, hi) = SENSITIVITY_SCALE_RANGE;
        self.sensitivity_scale = scale.clamp(lo, hi);
    }

    /// Set yaw and pitch directly. Pitch is clamped, non-finite values are ignored.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() {
            self.yaw = yaw;
        }
        if pitch.is_finite() {
            self.pitch = pitch;
        }
        self.pitch = self.pitch.clamp(PITCH_MIN, PITCH_MAX);
    }

    /// Apply one frame of pointer motion and return the new `(yaw, pitch)`.
    ///
    /// A `(0, 0)` delta leaves the orientation untouched. Non-finite deltas are
    /// treated as zero.
    pub fn apply_look(&mut self, dx: f32, dy: f32) -> (f32, f32) {
        let sensitivity = self.sensitivity();
        if dx.is_finite() {
            self.yaw -= dx * sensitivity;
        }
        if dy.is_finite() {
            self.pitch -= dy * sensitivity;
        }
        self.pitch = self.pitch.clamp(PITCH_MIN, PITCH_MAX);
        (self.yaw, self.pitch)
    }

    /// Rotation carrying the rig's local frame into world space (yaw only).
    #[inline]
    pub fn yaw_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }

    /// Unit look direction including pitch.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }

    /// Reset orientation to yaw 0, pitch 0 (looking toward -Z).
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

/// Unit look direction for a yaw/pitch pair.
pub fn look_direction(yaw: f32, pitch: f32) -> Vec3 {
    (Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch)) * Vec3::NEG_Z
}
