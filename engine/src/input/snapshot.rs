//! Per-frame input snapshots.
//!
//! The [`InputCollector`] is the only thing that listens to platform events. It
//! keeps the held-key set and the pointer accumulator, timestamps jump presses on
//! the shared clock, and once per frame hands the controller an immutable
//! [`InputSnapshot`] value.

use std::collections::HashSet;

use glam::Vec2;

use super::bindings::{InputAction, KeyBindings};
use super::keyboard::{KeyCode, KeyboardState, MovementKeys};
use super::mouse_state::{CaptureState, PointerState};
use crate::time::Clock;

/// Everything the controller reads for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Held movement directions.
    pub movement: MovementKeys,
    /// Crouch is a level: true for as long as the key is held.
    pub crouch: bool,
    /// Pointer motion accumulated since the previous snapshot (device units).
    pub look_delta: Vec2,
    /// Clock time of the most recent jump key press not yet handed out.
    pub jump_pressed_at: Option<f64>,
}

impl InputSnapshot {
    /// Snapshot with no keys, no motion and no jump request.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Collects platform input events between frames.
#[derive(Debug, Clone)]
pub struct InputCollector<C: Clock> {
    clock: C,
    bindings: KeyBindings,
    held: HashSet<KeyCode>,
    pointer: PointerState,
    jump_pressed_at: Option<f64>,
}

impl<C: Clock> InputCollector<C> {
    /// Create a collector with the default key layout.
    pub fn new(clock: C) -> Self {
        Self::with_bindings(clock, KeyBindings::new())
    }

    pub fn with_bindings(clock: C, bindings: KeyBindings) -> Self {
        Self {
            clock,
            bindings,
            held: HashSet::new(),
            pointer: PointerState::new(),
            jump_pressed_at: None,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Handle a key press or release.
    ///
    /// Returns the bound action, if any. A jump press is timestamped only on the
    /// transition to pressed, so key auto-repeat does not refresh the buffer.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<InputAction> {
        let action = self.bindings.get_action(key)?;

        if pressed {
            let was_active = self.is_action_held(action);
            self.held.insert(key);
            if action == InputAction::Jump && !was_active {
                self.jump_pressed_at = Some(self.clock.now());
            }
        } else {
            self.held.remove(&key);
        }

        Some(action)
    }

    /// Feed raw pointer motion. Dropped unless the pointer is captured.
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        self.pointer.accumulate_delta(dx, dy);
    }

    /// Record a capture state change reported by the platform.
    pub fn set_capture(&mut self, capture: CaptureState) {
        if capture != self.pointer.capture() {
            log::debug!("pointer capture {:?} -> {:?}", self.pointer.capture(), capture);
        }
        self.pointer.set_capture(capture);
    }

    /// The platform refused pointer capture. Look input stays off until a later
    /// request succeeds; movement keeps working.
    pub fn capture_failed(&mut self, reason: &str) {
        log::warn!("pointer capture failed: {reason}");
        self.pointer.set_capture(CaptureState::Failed);
    }

    pub fn capture(&self) -> CaptureState {
        self.pointer.capture()
    }

    /// Release every held key and forget pending input. Used when focus is lost
    /// or the session pauses, so no key stays stuck down.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.jump_pressed_at = None;
        self.pointer.consume_delta();
    }

    /// Current held-key state, resolved through the bindings.
    pub fn keyboard(&self) -> KeyboardState {
        KeyboardState {
            movement: MovementKeys {
                forward: self.is_action_held(InputAction::MoveForward),
                backward: self.is_action_held(InputAction::MoveBack),
                left: self.is_action_held(InputAction::MoveLeft),
                right: self.is_action_held(InputAction::MoveRight),
            },
            crouch: self.is_action_held(InputAction::Crouch),
            jump: self.is_action_held(InputAction::Jump),
        }
    }

    /// Drain this frame's input: pointer motion is reset to zero and the pending
    /// jump press is handed over exactly once.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let keyboard = self.keyboard();
        InputSnapshot {
            movement: keyboard.movement,
            crouch: keyboard.crouch,
            look_delta: self.pointer.consume_delta(),
            jump_pressed_at: self.jump_pressed_at.take(),
        }
    }

    fn is_action_held(&self, action: InputAction) -> bool {
        self.held
            .iter()
            .any(|key| self.bindings.get_action(*key) == Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn collector() -> (ManualClock, InputCollector<ManualClock>) {
        let clock = ManualClock::new();
        (clock.clone(), InputCollector::new(clock))
    }

    #[test]
    fn test_empty_snapshot() {
        let (_, mut input) = collector();
        assert!(input.snapshot().is_empty());
    }

    #[test]
    fn test_held_keys_resolve_through_bindings() {
        let (_, mut input) = collector();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::ArrowLeft, true);
        input.handle_key(KeyCode::ControlLeft, true);

        let snap = input.snapshot();
        assert!(snap.movement.forward);
        assert!(snap.movement.left);
        assert!(!snap.movement.right);
        assert!(snap.crouch);

        // Held keys persist across snapshots.
        assert!(input.snapshot().movement.forward);
    }

    #[test]
    fn test_two_keys_for_one_action() {
        let (_, mut input) = collector();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::ArrowUp, true);
        input.handle_key(KeyCode::ArrowUp, false);
        assert!(input.keyboard().movement.forward);

        input.handle_key(KeyCode::W, false);
        assert!(!input.keyboard().movement.forward);
    }

    #[test]
    fn test_jump_press_timestamped_once() {
        let (clock, mut input) = collector();
        clock.set(1.5);
        assert_eq!(input.handle_key(KeyCode::Space, true), Some(InputAction::Jump));

        // Auto-repeat while held does not move the timestamp.
        clock.set(1.7);
        input.handle_key(KeyCode::Space, true);

        let snap = input.snapshot();
        assert_eq!(snap.jump_pressed_at, Some(1.5));
        assert_eq!(input.snapshot().jump_pressed_at, None);
    }

    #[test]
    fn test_jump_repress_after_release() {
        let (clock, mut input) = collector();
        input.handle_key(KeyCode::Space, true);
        input.handle_key(KeyCode::Space, false);
        clock.set(0.4);
        input.handle_key(KeyCode::Space, true);
        assert_eq!(input.snapshot().jump_pressed_at, Some(0.4));
    }

    #[test]
    fn test_pointer_motion_requires_capture() {
        let (_, mut input) = collector();
        input.handle_pointer_motion(5.0, 5.0);
        assert_eq!(input.snapshot().look_delta, Vec2::ZERO);

        input.set_capture(CaptureState::Captured);
        input.handle_pointer_motion(5.0, -2.0);
        input.handle_pointer_motion(1.0, 1.0);
        assert_eq!(input.snapshot().look_delta, Vec2::new(6.0, -1.0));
        assert_eq!(input.snapshot().look_delta, Vec2::ZERO);
    }

    #[test]
    fn test_capture_failure_degrades_to_no_look() {
        let (_, mut input) = collector();
        input.set_capture(CaptureState::Requested);
        input.capture_failed("user gesture required");
        input.handle_pointer_motion(50.0, 0.0);
        input.handle_key(KeyCode::D, true);

        let snap = input.snapshot();
        assert_eq!(input.capture(), CaptureState::Failed);
        assert_eq!(snap.look_delta, Vec2::ZERO);
        assert!(snap.movement.right);
    }

    #[test]
    fn test_release_all() {
        let (_, mut input) = collector();
        input.set_capture(CaptureState::Captured);
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::Space, true);
        input.handle_pointer_motion(3.0, 3.0);

        input.release_all();
        assert!(input.snapshot().is_empty());
    }

    #[test]
    fn test_unbound_key_ignored() {
        let (_, mut input) = collector();
        assert_eq!(input.handle_key(KeyCode::Unknown, true), None);
        assert!(input.snapshot().is_empty());
    }
}
