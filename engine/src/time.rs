//! Monotonic clock capability.
//!
//! The controller and the input collector both timestamp events in seconds on the
//! same clock. Production code uses [`MonotonicClock`] (elapsed time since the clock
//! was created); tests and the replay driver use [`ManualClock`], a shared handle that
//! is advanced explicitly.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Timestamp used for "never happened". Any `now - NEVER` is `+inf`.
pub const NEVER: f64 = f64::NEG_INFINITY;

/// Read-only monotonic time source, in seconds.
pub trait Clock {
    /// Current time in seconds. Must never decrease between calls.
    fn now(&self) -> f64;
}

/// Wall-clock backed monotonic time, measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was created.
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.elapsed()
    }
}

/// Manually driven clock.
///
/// Clones share the same underlying time, so a collector and a controller built
/// from clones of one `ManualClock` always agree on `now`.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    /// Create a clock reading `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock reading `t` seconds.
    pub fn starting_at(t: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(t)),
        }
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.now.set(self.now.get() + dt);
        }
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, t: f64) {
        if t.is_finite() && t > self.now.get() {
            self.now.set(t);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(0.25);
        assert_eq!(other.now(), 0.25);
    }

    #[test]
    fn test_manual_clock_never_goes_backwards() {
        let clock = ManualClock::starting_at(1.0);
        clock.set(0.5);
        clock.advance(-1.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.now(), 1.0);
        clock.set(2.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn test_monotonic_clock_non_decreasing() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
        assert!(a >= 0.0);
    }

    #[test]
    fn test_never_is_infinitely_old() {
        let elapsed = 3.0 - NEVER;
        assert!(elapsed.is_infinite() && elapsed > 0.0);
    }
}
