//! Game Session
//!
//! Couples the input collector and the controller to one clock and gates the
//! frame loop behind the start overlay.
//!
//! A session starts inactive. The start key (whatever is bound to jump) or an
//! explicit [`GameSession::start`] activates it and requests pointer capture.
//! Pause (Escape by default) or losing capture deactivates it again. While
//! inactive, [`GameSession::frame`] produces nothing and the host keeps drawing
//! the last transform.

use glam::Vec3;

use crate::input::{CaptureState, InputAction, InputCollector, KeyCode};
use crate::player::{ConfigError, ControllerConfig, FirstPersonController, Transform};
use crate::time::Clock;

/// Input collector and controller sharing one clock.
#[derive(Debug, Clone)]
pub struct GameSession<C: Clock + Clone> {
    input: InputCollector<C>,
    controller: FirstPersonController<C>,
    active: bool,
}

impl<C: Clock + Clone> GameSession<C> {
    /// Create an inactive session. The config is validated.
    pub fn new(config: ControllerConfig, clock: C) -> Result<Self, ConfigError> {
        let input = InputCollector::new(clock.clone());
        let controller = FirstPersonController::try_new(config, clock)?;
        Ok(Self {
            input,
            controller,
            active: false,
        })
    }

    /// Create an inactive session with the rig at `position` facing `yaw`.
    pub fn with_spawn(
        config: ControllerConfig,
        clock: C,
        position: Vec3,
        yaw: f32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let input = InputCollector::new(clock.clone());
        let controller = FirstPersonController::with_spawn(config, clock, position, yaw);
        Ok(Self {
            input,
            controller,
            active: false,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn input(&self) -> &InputCollector<C> {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputCollector<C> {
        &mut self.input
    }

    pub fn controller(&self) -> &FirstPersonController<C> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FirstPersonController<C> {
        &mut self.controller
    }

    /// Hide the start overlay, run the loop and ask for pointer capture.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.request_capture();
        log::info!("session started");
    }

    /// Stop the loop and give the pointer back. Held keys are forgotten so
    /// nothing stays pressed after resuming.
    pub fn pause(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.input.set_capture(CaptureState::Released);
        self.input.release_all();
        log::info!("session paused");
    }

    /// Ask the platform for pointer capture again, e.g. after a click inside the
    /// window once an earlier request was refused.
    pub fn request_capture(&mut self) {
        if self.active && self.input.capture() != CaptureState::Captured {
            self.input.set_capture(CaptureState::Requested);
        }
    }

    /// The platform granted pointer capture.
    pub fn capture_granted(&mut self) {
        if self.active {
            self.input.set_capture(CaptureState::Captured);
        }
    }

    /// The platform refused pointer capture. The session keeps running without
    /// look input.
    pub fn capture_failed(&mut self, reason: &str) {
        self.input.capture_failed(reason);
    }

    /// The platform took pointer capture away (focus loss, OS shortcut). Treated
    /// as a pause.
    pub fn capture_lost(&mut self) {
        if self.input.capture() == CaptureState::Captured {
            self.pause();
        }
        self.input.set_capture(CaptureState::Released);
    }

    /// Route a key event.
    ///
    /// While inactive the only key that does anything is the start key. While
    /// active, the pause action pauses and every other key goes to the collector.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<InputAction> {
        let action = self.input.bindings().get_action(key);

        if !self.active {
            if pressed && action == Some(InputAction::Jump) {
                self.start();
            }
            return action;
        }

        if action == Some(InputAction::Pause) {
            if pressed {
                self.pause();
            }
            return action;
        }

        self.input.handle_key(key, pressed)
    }

    /// Route raw pointer motion. Dropped while inactive.
    pub fn handle_pointer_motion(&mut self, dx: f32, dy: f32) {
        if self.active {
            self.input.handle_pointer_motion(dx, dy);
        }
    }

    /// Run one frame. `None` while the session is inactive.
    pub fn frame(&mut self, dt: f32) -> Option<Transform> {
        if !self.active {
            return None;
        }
        let snapshot = self.input.snapshot();
        Some(self.controller.update(dt, &snapshot))
    }

    /// Latest rig pose, whether or not the loop is running.
    pub fn transform(&self) -> Transform {
        self.controller.transform()
    }
}
