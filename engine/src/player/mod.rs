//! Player Module
//!
//! First-person rig movement for the practice range.
//!
//! # Components
//!
//! - [`FirstPersonController`] - Per-frame driver composing the parts below
//! - [`HorizontalLocomotion`] - Yaw-relative WASD movement with velocity smoothing
//!   - Hard clamp to the rectangular play area
//! - [`JumpStateMachine`] - Gravity, landing and jump timing (buffer, coyote time, cooldown)
//! - [`CrouchModifier`] - Crouch level with blended stance height
//! - [`ControllerConfig`] - Tuning values, loadable from JSON

pub mod config;
pub mod controller;
pub mod crouch;
pub mod jump;
pub mod locomotion;
pub mod state;

pub use config::{ConfigError, ControllerConfig, HorizontalBounds, SmoothingMode};
pub use controller::FirstPersonController;
pub use crouch::CrouchModifier;
pub use jump::{JumpPhase, JumpStateMachine, VerticalStep};
pub use locomotion::{HorizontalLocomotion, wish_direction};
pub use state::{MovementState, Transform};
