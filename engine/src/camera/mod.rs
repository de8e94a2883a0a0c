//! Camera Module
//!
//! Look orientation for the first-person rig. Window-system agnostic: it only
//! deals with yaw/pitch state and direction math.

pub mod look_rig;

pub use look_rig::{LookRig, PITCH_MAX, PITCH_MIN, look_direction};
