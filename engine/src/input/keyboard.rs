//! Keyboard Input Module
//!
//! Key codes and held-key tracking for the movement keys.
//! Decoupled from any windowing system; see [`super::winit_keys`] for the
//! winit translation.

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,
    Enter,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Letter keys (alternate bindings)
    C,
    E,
    Q,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Held state of the four planar movement directions.
///
/// Opposing directions may be held at the same time; they cancel in the axis
/// helpers rather than being rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// Held state of every key the controller cares about.
///
/// `jump` is tracked as a level only to detect the press edge; the edge itself
/// is what the collector timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    pub movement: MovementKeys,
    pub crouch: bool,
    pub jump: bool,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all keyboard state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
