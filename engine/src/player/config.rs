//! Controller configuration.
//!
//! Every tuning constant of the first-person controller lives here so any single
//! value can be overridden for a session or a test. Loaded from JSON with
//! `serde_json`; missing fields fall back to [`ControllerConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How horizontal velocity approaches its target each update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Lerp by `acceleration`, then decay by `damping^dt`. Deceleration is
    /// frame-rate independent.
    #[default]
    TimeAware,
    /// Lerp by `acceleration` only. Simpler, but the feel depends on frame rate.
    FixedFraction,
}

/// Axis-aligned horizontal play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl HorizontalBounds {
    pub fn new(x_min: f32, x_max: f32, z_min: f32, z_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    /// Hard-clamp a planar coordinate pair into the bounds.
    ///
    /// Never panics: with inverted bounds the max edge wins, and a NaN edge is
    /// ignored.
    #[inline]
    pub fn clamp(&self, x: f32, z: f32) -> (f32, f32) {
        (
            x.max(self.x_min).min(self.x_max),
            z.max(self.z_min).min(self.z_max),
        )
    }

    #[inline]
    pub fn contains(&self, x: f32, z: f32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.z_min..=self.z_max).contains(&z)
    }
}

impl Default for HorizontalBounds {
    /// Walkable floor of the range room.
    fn default() -> Self {
        Self::new(-6.2, 8.2, -7.3, 7.3)
    }
}

/// Errors raised while loading or validating a [`ControllerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning for the first-person controller. Units are meters, seconds, radians.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    // ========================================================================
    // Look
    // ========================================================================
    /// Radians per pointer device unit.
    pub sensitivity: f32,

    // ========================================================================
    // Horizontal movement
    // ========================================================================
    /// Target planar speed with full multiplier (m/s).
    pub move_speed: f32,
    /// Fraction of the gap to target velocity closed per update, in `[0, 1]`.
    pub acceleration: f32,
    /// Per-second velocity decay base in `(0, 1]`. 1.0 disables decay.
    pub damping: f32,
    pub smoothing: SmoothingMode,
    /// Multiplier on horizontal speed while airborne.
    pub air_control_factor: f32,
    pub bounds: HorizontalBounds,

    // ========================================================================
    // Crouch
    // ========================================================================
    /// Multiplier on horizontal speed while crouching.
    pub crouch_speed_factor: f32,
    /// Stance height while fully crouched, relative to standing (usually negative).
    pub crouch_height_offset: f32,
    /// Exponential approach rate of the stance height (1/s).
    pub height_blend_rate: f32,

    // ========================================================================
    // Vertical
    // ========================================================================
    /// Vertical acceleration (m/s², negative pulls down).
    pub gravity: f32,
    /// Upward speed set by a jump (m/s).
    pub jump_strength: f32,
    /// Lowest vertical speed reached while falling (m/s, <= 0).
    pub terminal_velocity: f32,
    pub ground_y: f32,
    pub max_y: f32,

    // ========================================================================
    // Jump timing (seconds)
    // ========================================================================
    /// How long before landing a jump press is still honored.
    pub jump_buffer_window: f32,
    /// How long after leaving the ground a jump is still allowed.
    pub coyote_time_window: f32,
    /// Minimum time between two jumps.
    pub jump_cooldown: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,

            move_speed: 4.0,
            acceleration: 0.15,
            damping: 0.05,
            smoothing: SmoothingMode::TimeAware,
            air_control_factor: 0.6,
            bounds: HorizontalBounds::default(),

            crouch_speed_factor: 0.5,
            crouch_height_offset: -0.6,
            height_blend_rate: 10.0,

            gravity: -20.0,
            jump_strength: 8.0,
            terminal_velocity: -30.0,
            ground_y: 0.0,
            max_y: 4.0,

            jump_buffer_window: 0.12,
            coyote_time_window: 0.1,
            jump_cooldown: 0.15,
        }
    }
}

impl ControllerConfig {
    /// The first release's feel: fixed-fraction smoothing with a very slow
    /// approach, and the low pointer sensitivity the settings slider scaled.
    pub fn legacy() -> Self {
        Self {
            sensitivity: 0.0002,
            move_speed: 1.0,
            acceleration: 0.002,
            damping: 0.9,
            smoothing: SmoothingMode::FixedFraction,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON document. Missing fields take default values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Check every value the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("sensitivity", self.sensitivity),
            ("move_speed", self.move_speed),
            ("acceleration", self.acceleration),
            ("damping", self.damping),
            ("air_control_factor", self.air_control_factor),
            ("bounds.x_min", self.bounds.x_min),
            ("bounds.x_max", self.bounds.x_max),
            ("bounds.z_min", self.bounds.z_min),
            ("bounds.z_max", self.bounds.z_max),
            ("crouch_speed_factor", self.crouch_speed_factor),
            ("crouch_height_offset", self.crouch_height_offset),
            ("height_blend_rate", self.height_blend_rate),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("terminal_velocity", self.terminal_velocity),
            ("ground_y", self.ground_y),
            ("max_y", self.max_y),
            ("jump_buffer_window", self.jump_buffer_window),
            ("coyote_time_window", self.coyote_time_window),
            ("jump_cooldown", self.jump_cooldown),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(field, "must be finite"));
        }

        let non_negative = [
            ("sensitivity", self.sensitivity),
            ("move_speed", self.move_speed),
            ("air_control_factor", self.air_control_factor),
            ("crouch_speed_factor", self.crouch_speed_factor),
            ("height_blend_rate", self.height_blend_rate),
            ("jump_buffer_window", self.jump_buffer_window),
            ("coyote_time_window", self.coyote_time_window),
            ("jump_cooldown", self.jump_cooldown),
        ];
        if let Some(&(field, _)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(invalid(field, "must not be negative"));
        }

        if !(0.0..=1.0).contains(&self.acceleration) {
            return Err(invalid("acceleration", "must be within [0, 1]"));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return Err(invalid("damping", "must be within (0, 1]"));
        }
        if self.terminal_velocity > 0.0 {
            return Err(invalid("terminal_velocity", "must not be positive"));
        }
        if self.bounds.x_min > self.bounds.x_max {
            return Err(invalid("bounds.x_min", "must not exceed bounds.x_max"));
        }
        if self.bounds.z_min > self.bounds.z_max {
            return Err(invalid("bounds.z_min", "must not exceed bounds.z_max"));
        }
        if self.ground_y > self.max_y {
            return Err(invalid("ground_y", "must not exceed max_y"));
        }
        Ok(())
    }

    /// Combined horizontal speed multiplier for a stance and ground state.
    ///
    /// Crouch and air control combine multiplicatively.
    #[inline]
    pub fn speed_multiplier(&self, crouching: bool, on_ground: bool) -> f32 {
        let stance = if crouching { self.crouch_speed_factor } else { 1.0 };
        let air = if on_ground { 1.0 } else { self.air_control_factor };
        stance * air
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ControllerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.jump_strength, 8.0);
        assert_eq!(config.jump_buffer_window, 0.12);
        assert_eq!(config.coyote_time_window, 0.1);
        assert_eq!(config.jump_cooldown, 0.15);
        assert_eq!(config.smoothing, SmoothingMode::TimeAware);
    }

    #[test]
    fn test_legacy_config_is_valid() {
        let config = ControllerConfig::legacy();
        assert!(config.validate().is_ok());
        assert_eq!(config.smoothing, SmoothingMode::FixedFraction);
    }

    #[test]
    fn test_speed_multiplier_combines() {
        let config = ControllerConfig::default();
        assert_eq!(config.speed_multiplier(false, true), 1.0);
        assert_eq!(config.speed_multiplier(true, true), config.crouch_speed_factor);
        assert_eq!(config.speed_multiplier(false, false), config.air_control_factor);
        let both = config.crouch_speed_factor * config.air_control_factor;
        assert!((config.speed_multiplier(true, false) - both).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ControllerConfig::from_json_str(
            r#"{ "jump_strength": 6.5, "smoothing": "fixed_fraction",
                 "bounds": { "x_min": -1, "x_max": 1, "z_min": -2, "z_max": 2 } }"#,
        )
        .unwrap();
        assert_eq!(config.jump_strength, 6.5);
        assert_eq!(config.smoothing, SmoothingMode::FixedFraction);
        assert_eq!(config.bounds, HorizontalBounds::new(-1.0, 1.0, -2.0, 2.0));
        assert_eq!(config.gravity, ControllerConfig::default().gravity);
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&ControllerConfig::default()).unwrap();
        let back = ControllerConfig::from_json_str(&json).unwrap();
        assert_eq!(back, ControllerConfig::default());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ControllerConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases: Vec<(ControllerConfig, &str)> = vec![
            (ControllerConfig { acceleration: 1.5, ..Default::default() }, "acceleration"),
            (ControllerConfig { damping: 0.0, ..Default::default() }, "damping"),
            (ControllerConfig { terminal_velocity: 5.0, ..Default::default() }, "terminal_velocity"),
            (ControllerConfig { ground_y: 10.0, ..Default::default() }, "ground_y"),
            (ControllerConfig { jump_cooldown: -0.1, ..Default::default() }, "jump_cooldown"),
            (ControllerConfig { gravity: f32::NAN, ..Default::default() }, "gravity"),
            (
                ControllerConfig {
                    bounds: HorizontalBounds::new(1.0, -1.0, 0.0, 0.0),
                    ..Default::default()
                },
                "bounds.x_min",
            ),
        ];

        for (config, expected) in cases {
            match config.validate() {
                Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected invalid `{expected}`, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ControllerConfig::load("/nonexistent/cube_range/controller.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_inverted_bounds_clamp_without_panic() {
        let bounds = HorizontalBounds::new(2.0, -2.0, f32::NAN, 1.0);
        let (x, z) = bounds.clamp(5.0, 3.0);
        assert_eq!(x, -2.0);
        assert_eq!(z, 1.0);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = HorizontalBounds::default();
        assert_eq!(bounds.clamp(100.0, -100.0), (8.2, -7.3));
        assert!(bounds.contains(0.0, 0.0));
        assert!(!bounds.contains(9.0, 0.0));
    }
}
