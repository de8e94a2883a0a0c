//! Player Crouch Modifier
//!
//! Tracks the crouch key as a level and blends the rig's stance height toward
//! the crouched or standing target.
//!
//! # Stance height
//!
//! The stance height is an offset added to the eye position: `0.0` standing,
//! `crouch_height_offset` (negative) crouched. It approaches its target
//! exponentially at `height_blend_rate` per second and never snaps, so a change
//! is visible over several frames.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cube_range_engine::player::CrouchModifier;
//!
//! let mut crouch = CrouchModifier::new();
//!
//! // Each frame:
//! let (stance_height, speed_multiplier) = crouch.update(dt, crouch_held, on_ground, &config);
//! ```

use super::config::ControllerConfig;

/// Crouch state with a smoothly blended stance height.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrouchModifier {
    /// Whether the rig is crouching this frame
    crouching: bool,

    /// Current stance offset in meters (0 = standing)
    stance_height: f32,
}

impl CrouchModifier {
    /// Create a standing modifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the rig is crouching.
    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    /// Current stance offset in meters.
    ///
    /// Between `0.0` and the crouch offset while a blend is in progress.
    pub fn stance_height(&self) -> f32 {
        self.stance_height
    }

    /// Target stance offset for the current crouch state.
    pub fn target_height(&self, config: &ControllerConfig) -> f32 {
        if self.crouching {
            config.crouch_height_offset
        } else {
            0.0
        }
    }

    /// Follow the crouch key level. No debouncing: the stance flips on the
    /// same frame the key does.
    pub fn set_held(&mut self, held: bool) {
        if held != self.crouching {
            log::debug!("stance -> {}", if held { "crouching" } else { "standing" });
        }
        self.crouching = held;
    }

    /// Drop out of the crouch (a jump does this). The key level is read again
    /// next frame.
    pub fn clear(&mut self) {
        self.set_held(false);
    }

    /// Horizontal speed multiplier for the current stance and ground state.
    pub fn speed_multiplier(&self, on_ground: bool, config: &ControllerConfig) -> f32 {
        config.speed_multiplier(self.crouching, on_ground)
    }

    /// Move the stance height toward its target and return it.
    ///
    /// The step fraction is capped at 1, so a long frame lands on the target
    /// instead of overshooting it.
    pub fn blend(&mut self, dt: f32, config: &ControllerConfig) -> f32 {
        let target = self.target_height(config);
        let t = (config.height_blend_rate * dt).clamp(0.0, 1.0);
        self.stance_height += (target - self.stance_height) * t;
        self.stance_height
    }

    /// One standalone frame: follow `crouch_held`, then blend.
    ///
    /// Returns `(stance_height, speed_multiplier)`.
    pub fn update(
        &mut self,
        dt: f32,
        crouch_held: bool,
        on_ground: bool,
        config: &ControllerConfig,
    ) -> (f32, f32) {
        self.set_held(crouch_held);
        let multiplier = self.speed_multiplier(on_ground, config);
        let height = self.blend(dt, config);
        (height, multiplier)
    }

    /// Stand up immediately.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn config() -> ControllerConfig {
        ControllerConfig::default()
    }

    #[test]
    fn test_default_standing() {
        let crouch = CrouchModifier::new();
        assert!(!crouch.is_crouching());
        assert_eq!(crouch.stance_height(), 0.0);
        assert_eq!(crouch.speed_multiplier(true, &config()), 1.0);
    }

    #[test]
    fn test_crouch_is_immediate_but_height_is_not() {
        let config = config();
        let mut crouch = CrouchModifier::new();
        let (height, multiplier) = crouch.update(DT, true, true, &config);

        assert!(crouch.is_crouching());
        assert_eq!(multiplier, config.crouch_speed_factor);
        assert!(height < 0.0);
        assert!(height > config.crouch_height_offset);
    }

    #[test]
    fn test_crouch_converges_monotonically_without_overshoot() {
        let config = config();
        let mut crouch = CrouchModifier::new();
        let mut previous = crouch.stance_height();

        for _ in 0..300 {
            let (height, _) = crouch.update(DT, true, true, &config);
            assert!(height <= previous, "not monotonic: {height} > {previous}");
            assert!(height >= config.crouch_height_offset, "overshoot: {height}");
            previous = height;
        }

        assert!((previous - config.crouch_height_offset).abs() < 1e-4);
    }

    #[test]
    fn test_stand_up_blends_back() {
        let config = config();
        let mut crouch = CrouchModifier::new();
        for _ in 0..300 {
            crouch.update(DT, true, true, &config);
        }

        let mut previous = crouch.stance_height();
        for _ in 0..300 {
            let (height, _) = crouch.update(DT, false, true, &config);
            assert!(height >= previous);
            assert!(height <= 0.0);
            previous = height;
        }
        assert!(previous.abs() < 1e-4);
    }

    #[test]
    fn test_long_frame_lands_on_target() {
        let config = config();
        let mut crouch = CrouchModifier::new();
        let (height, _) = crouch.update(10.0, true, true, &config);
        assert_eq!(height, config.crouch_height_offset);
    }

    #[test]
    fn test_zero_dt_keeps_height() {
        let config = config();
        let mut crouch = CrouchModifier::new();
        crouch.update(DT, true, true, &config);
        let before = crouch.stance_height();
        crouch.update(0.0, true, true, &config);
        assert_eq!(crouch.stance_height(), before);
    }

    #[test]
    fn test_air_multiplier_stacks_with_crouch() {
        let config = config();
        let mut crouch = CrouchModifier::new();

        assert_eq!(crouch.speed_multiplier(false, &config), config.air_control_factor);

        crouch.set_held(true);
        let expected = config.crouch_speed_factor * config.air_control_factor;
        assert!((crouch.speed_multiplier(false, &config) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_clear_retargets_standing() {
        let config = config();
        let mut crouch = CrouchModifier::new();
        crouch.update(DT, true, true, &config);
        crouch.clear();

        assert!(!crouch.is_crouching());
        assert_eq!(crouch.target_height(&config), 0.0);
    }

    #[test]
    fn test_reset() {
        let mut crouch = CrouchModifier::new();
        crouch.update(DT, true, true, &config());
        crouch.reset();
        assert_eq!(crouch, CrouchModifier::new());
    }
}
