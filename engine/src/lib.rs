//! Cube Range Engine Library
//!
//! First-person movement for a small practice range: mouse look, WASD
//! locomotion inside a walled rectangle, jumping with buffer/coyote/cooldown
//! timing, and crouching. The library is platform and renderer agnostic; a
//! host feeds it input events and a frame time, and draws the returned
//! [`Transform`].
//!
//! # Modules
//!
//! - [`camera`] - Yaw/pitch look rig
//! - [`input`] - Key bindings, pointer capture and per-frame input snapshots
//! - [`player`] - Locomotion, jump and crouch, composed by the controller
//! - [`session`] - Start/pause gating around the frame loop
//! - [`time`] - Clock capability shared by input and controller
//!
//! # Example
//!
//! ```ignore
//! use cube_range_engine::{ControllerConfig, GameSession, KeyCode};
//! use cube_range_engine::time::MonotonicClock;
//!
//! let mut session = GameSession::new(ControllerConfig::default(), MonotonicClock::new())?;
//!
//! // Event loop
//! session.handle_key(KeyCode::Space, true); // start
//! session.capture_granted();
//! session.handle_pointer_motion(dx, dy);
//!
//! // Frame
//! if let Some(transform) = session.frame(delta_time) {
//!     camera.set_eye(transform.eye_position(), transform.forward());
//! }
//! ```

pub mod camera;
pub mod input;
pub mod player;
pub mod session;
pub mod time;

// Re-export commonly used input types
pub use input::{CaptureState, InputCollector, InputSnapshot, KeyCode, MovementKeys};
// Re-export player types
pub use player::{ConfigError, ControllerConfig, FirstPersonController, MovementState, Transform};
pub use session::GameSession;
