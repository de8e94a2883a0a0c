//! Pointer-lock Mouse State
//!
//! Accumulates raw pointer motion between frames for first-person look.
//! Motion only counts while the pointer is captured; everything received
//! before capture, after release, or after a failed capture request is dropped.

use glam::Vec2;

/// Pointer capture lifecycle as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Pointer is free; look input is ignored.
    #[default]
    Released,
    /// Capture was requested and the platform has not answered yet.
    Requested,
    /// Pointer is locked to the canvas; motion drives the look rig.
    Captured,
    /// The platform refused the request. The player can click to retry.
    Failed,
}

/// Pointer delta accumulator gated on capture.
///
/// # Example
///
/// ```rust,ignore
/// let mut pointer = PointerState::new();
/// pointer.set_capture(CaptureState::Captured);
///
/// // In event loop
/// pointer.accumulate_delta(10.0, -5.0);
/// pointer.accumulate_delta(3.0, 2.0);
///
/// // Once per frame
/// let delta = pointer.consume_delta(); // (13.0, -3.0)
/// ```
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    delta: Vec2,
    capture: CaptureState,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw pointer motion. Ignored unless captured or non-finite.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.capture != CaptureState::Captured || !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.delta += Vec2::new(dx, dy);
    }

    /// Return the accumulated delta and reset it to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    /// Update the capture state. Leaving `Captured` drops pending motion so the
    /// view does not jump when capture comes back.
    pub fn set_capture(&mut self, capture: CaptureState) {
        if capture != CaptureState::Captured {
            self.delta = Vec2::ZERO;
        }
        self.capture = capture;
    }

    #[inline]
    pub fn capture(&self) -> CaptureState {
        self.capture
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.capture == CaptureState::Captured
    }

    /// Get the accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
