//! Per-frame movement state and the transform handed to the renderer.

use glam::{Vec2, Vec3};

use crate::camera::look_direction;

/// Full movement state of the rig after an update.
///
/// Read-only view assembled by the controller; mutating a copy has no effect
/// on the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementState {
    /// World-space rig position (feet)
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Smoothed planar velocity as `(vx, vz)`
    pub horizontal_velocity: Vec2,
    pub vertical_velocity: f32,
    pub on_ground: bool,
    pub crouching: bool,
    pub stance_height: f32,
    /// Clock seconds; [`crate::time::NEVER`] when the event has not happened.
    pub last_grounded_time: f64,
    pub last_jump_pressed_time: f64,
    pub last_jump_time: f64,
}

impl MovementState {
    /// The transform a renderer needs out of this state.
    pub fn transform(&self) -> Transform {
        Transform {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
            stance_height: self.stance_height,
        }
    }
}

/// Rig pose produced once per frame.
///
/// The renderer applies this to its own camera object; the controller never
/// touches rendering state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    /// Vertical offset of the pitch pivot (0 standing, negative crouched)
    pub stance_height: f32,
}

impl Transform {
    /// Camera position: rig position raised by the stance offset.
    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.stance_height
    }

    /// Unit look direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        look_direction(self.yaw, self.pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_position_applies_stance() {
        let transform = Transform {
            position: Vec3::new(1.0, 2.0, 3.0),
            yaw: 0.0,
            pitch: 0.0,
            stance_height: -0.6,
        };
        let eye = transform.eye_position();
        assert_eq!(eye.x, 1.0);
        assert!((eye.y - 1.4).abs() < 1e-6);
        assert_eq!(eye.z, 3.0);
    }

    #[test]
    fn test_forward_matches_look_direction() {
        let transform = Transform {
            position: Vec3::ZERO,
            yaw: 0.4,
            pitch: -0.2,
            stance_height: 0.0,
        };
        assert_eq!(transform.forward(), look_direction(0.4, -0.2));
    }
}
