//! winit adapter for the input collector.
//!
//! Translates winit key codes and raw device motion into the engine's own
//! [`KeyCode`] and pointer deltas. This is the only place winit types appear.

use winit::event::{DeviceEvent, ElementState};
use winit::keyboard::{KeyCode as WinitKey, PhysicalKey};

use super::bindings::InputAction;
use super::keyboard::KeyCode;
use super::snapshot::InputCollector;
use crate::time::Clock;

impl From<WinitKey> for KeyCode {
    fn from(key: WinitKey) -> Self {
        match key {
            WinitKey::KeyW => KeyCode::W,
            WinitKey::KeyA => KeyCode::A,
            WinitKey::KeyS => KeyCode::S,
            WinitKey::KeyD => KeyCode::D,
            WinitKey::KeyC => KeyCode::C,
            WinitKey::KeyE => KeyCode::E,
            WinitKey::KeyQ => KeyCode::Q,
            WinitKey::Space => KeyCode::Space,
            WinitKey::ArrowUp => KeyCode::ArrowUp,
            WinitKey::ArrowDown => KeyCode::ArrowDown,
            WinitKey::ArrowLeft => KeyCode::ArrowLeft,
            WinitKey::ArrowRight => KeyCode::ArrowRight,
            WinitKey::Escape => KeyCode::Escape,
            WinitKey::Enter => KeyCode::Enter,
            WinitKey::ShiftLeft => KeyCode::ShiftLeft,
            WinitKey::ShiftRight => KeyCode::ShiftRight,
            WinitKey::ControlLeft => KeyCode::ControlLeft,
            WinitKey::ControlRight => KeyCode::ControlRight,
            _ => KeyCode::Unknown,
        }
    }
}

/// Map a physical key to an engine key code. Unidentified keys map to `Unknown`.
pub fn key_from_physical(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => code.into(),
        PhysicalKey::Unidentified(_) => KeyCode::Unknown,
    }
}

impl<C: Clock> InputCollector<C> {
    /// Forward a winit keyboard event.
    pub fn handle_winit_key(&mut self, key: PhysicalKey, state: ElementState) -> Option<InputAction> {
        self.handle_key(key_from_physical(key), state.is_pressed())
    }

    /// Forward a winit device event. Only raw mouse motion is used.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.handle_pointer_motion(*dx as f32, *dy as f32);
        }
    }
}
