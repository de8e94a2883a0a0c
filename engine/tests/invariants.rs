//! Per-frame invariants under random input.
//!
//! Whatever the input sequence and frame times, after every update:
//! pitch stays within ±90°, vertical velocity never drops below terminal
//! velocity, and the rig stays inside the play volume.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use proptest::prelude::*;

use cube_range_engine::input::{InputSnapshot, MovementKeys};
use cube_range_engine::player::{ControllerConfig, FirstPersonController, MovementState, SmoothingMode};
use cube_range_engine::time::{Clock, ManualClock};

#[derive(Debug, Clone)]
struct Frame {
    dt: f32,
    input: InputSnapshot,
    jump: bool,
}

fn arb_dt() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => 0.0f32..0.1,
        1 => Just(0.0f32),
        1 => 0.1f32..2.0,
        1 => prop_oneof![Just(-0.016f32), Just(f32::NAN), Just(f32::INFINITY)],
    ]
}

fn arb_frame() -> impl Strategy<Value = Frame> {
    (
        arb_dt(),
        any::<[bool; 4]>(),
        any::<bool>(),
        (-2000.0f32..2000.0, -2000.0f32..2000.0),
        prop::bool::weighted(0.15),
    )
        .prop_map(|(dt, keys, crouch, (dx, dy), jump)| Frame {
            dt,
            input: InputSnapshot {
                movement: MovementKeys {
                    forward: keys[0],
                    backward: keys[1],
                    left: keys[2],
                    right: keys[3],
                },
                crouch,
                look_delta: Vec2::new(dx, dy),
                jump_pressed_at: None,
            },
            jump,
        })
}

fn arb_config() -> impl Strategy<Value = ControllerConfig> {
    prop_oneof![
        Just(ControllerConfig::default()),
        Just(ControllerConfig::legacy()),
        Just(ControllerConfig {
            max_y: 0.8,
            smoothing: SmoothingMode::FixedFraction,
            ..ControllerConfig::default()
        }),
    ]
}

fn check(state: &MovementState, config: &ControllerConfig) -> Result<(), TestCaseError> {
    prop_assert!(state.pitch >= -FRAC_PI_2 && state.pitch <= FRAC_PI_2, "pitch {}", state.pitch);
    prop_assert!(state.vertical_velocity >= config.terminal_velocity);
    prop_assert!(state.position.y >= config.ground_y && state.position.y <= config.max_y);
    prop_assert!(config.bounds.contains(state.position.x, state.position.z));
    prop_assert!(state.position.is_finite());
    prop_assert!(state.horizontal_velocity.is_finite());
    prop_assert!(state.stance_height.is_finite());
    prop_assert!(state.stance_height <= 0.0 && state.stance_height >= config.crouch_height_offset);
    if state.on_ground {
        prop_assert_eq!(state.position.y, config.ground_y);
        prop_assert_eq!(state.vertical_velocity, 0.0);
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_every_frame(
        config in arb_config(),
        frames in prop::collection::vec(arb_frame(), 1..300),
    ) {
        let clock = ManualClock::new();
        let mut controller = FirstPersonController::new(config.clone(), clock.clone());

        for frame in &frames {
            if frame.dt.is_finite() && frame.dt > 0.0 {
                clock.advance(f64::from(frame.dt));
            }
            let mut input = frame.input;
            if frame.jump {
                input.jump_pressed_at = Some(clock.now());
            }
            controller.update(frame.dt, &input);
            check(&controller.state(), &config)?;
        }
    }

    /// Once an idle zero-length frame has run, further ones change nothing.
    #[test]
    fn idle_zero_dt_is_idempotent(
        frames in prop::collection::vec(arb_frame(), 0..60),
    ) {
        let clock = ManualClock::new();
        let mut controller = FirstPersonController::new(ControllerConfig::default(), clock.clone());
        for frame in &frames {
            clock.advance(0.016);
            controller.update(frame.dt, &frame.input);
        }

        controller.update(0.0, &InputSnapshot::empty());
        let settled = controller.state();
        for _ in 0..5 {
            controller.update(0.0, &InputSnapshot::empty());
            prop_assert_eq!(controller.state(), settled.clone());
        }
    }
}
