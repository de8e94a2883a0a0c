//! Input Module
//!
//! Platform-agnostic input collection for the first-person controller.
//! Platform events go into an [`InputCollector`]; once per frame it produces an
//! [`InputSnapshot`] that the controller reads as a plain value.
//!
//! # Example
//!
//! ```rust,ignore
//! use cube_range_engine::input::{CaptureState, InputCollector, KeyCode};
//! use cube_range_engine::time::MonotonicClock;
//!
//! let mut input = InputCollector::new(MonotonicClock::new());
//! input.set_capture(CaptureState::Captured);
//!
//! // Event loop
//! input.handle_key(KeyCode::W, true);
//! input.handle_pointer_motion(12.0, -3.0);
//!
//! // Frame
//! let snapshot = input.snapshot();
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;
pub mod snapshot;
pub mod winit_keys;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse_state::{CaptureState, PointerState};
pub use snapshot::{InputCollector, InputSnapshot};
pub use winit_keys::key_from_physical;
