//! range_replay: Drive the first-person controller from a scripted input timeline
//! and print the rig transform for every frame.
//!
//! Usage:
//!   cargo run --bin range_replay -- <script.json> [config.json]
//! Example:
//!   cargo run --bin range_replay -- data/replays/jump_buffer.json
//!
//! Script format:
//! ```json
//! {
//!   "fps": 60,
//!   "duration": 2.0,
//!   "events": [
//!     { "at": 0.0,  "type": "key", "key": "W", "pressed": true },
//!     { "at": 0.25, "type": "look", "dx": 120.0, "dy": 0.0 },
//!     { "at": 0.5,  "type": "key", "key": "Space", "pressed": true }
//!   ]
//! }
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use cube_range_engine::player::ControllerConfig;
use cube_range_engine::session::GameSession;
use cube_range_engine::time::ManualClock;
use cube_range_engine::{KeyCode, Transform};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ScriptEvent {
    Key { key: KeyCode, pressed: bool },
    Look { dx: f32, dy: f32 },
    Start,
    Pause,
    CaptureGranted,
    CaptureFailed { reason: String },
    CaptureLost,
}

#[derive(Debug, Deserialize)]
struct TimedEvent {
    at: f64,
    #[serde(flatten)]
    event: ScriptEvent,
}

fn default_fps() -> u32 {
    60
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default = "default_fps")]
    fps: u32,
    duration: f64,
    /// Start the session and grant capture before the first frame.
    #[serde(default = "default_true")]
    auto_start: bool,
    #[serde(default)]
    events: Vec<TimedEvent>,
}

fn apply(session: &mut GameSession<ManualClock>, event: &ScriptEvent) {
    match event {
        ScriptEvent::Key { key, pressed } => {
            session.handle_key(*key, *pressed);
        }
        ScriptEvent::Look { dx, dy } => session.handle_pointer_motion(*dx, *dy),
        ScriptEvent::Start => session.start(),
        ScriptEvent::Pause => session.pause(),
        ScriptEvent::CaptureGranted => session.capture_granted(),
        ScriptEvent::CaptureFailed { reason } => session.capture_failed(reason),
        ScriptEvent::CaptureLost => session.capture_lost(),
    }
}

fn print_frame(t: f64, transform: Option<Transform>, on_ground: bool) {
    match transform {
        Some(tr) => println!(
            "{t:8.3}  pos=({:7.3}, {:6.3}, {:7.3})  yaw={:7.3}  pitch={:6.3}  stance={:6.3}  {}",
            tr.position.x,
            tr.position.y,
            tr.position.z,
            tr.yaw,
            tr.pitch,
            tr.stance_height,
            if on_ground { "ground" } else { "air" },
        ),
        None => println!("{t:8.3}  paused"),
    }
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let mut args = std::env::args().skip(1);
    let Some(script_path) = args.next() else {
        bail!("usage: range_replay <script.json> [config.json]");
    };

    let config = match args.next() {
        Some(path) => {
            ControllerConfig::load(&path).with_context(|| format!("load config '{}'", path))?
        }
        None => ControllerConfig::default(),
    };

    let raw = std::fs::read_to_string(&script_path)
        .with_context(|| format!("read script '{}'", script_path))?;
    let mut script: Script =
        serde_json::from_str(&raw).with_context(|| format!("parse script '{}'", script_path))?;
    if script.fps == 0 || !script.duration.is_finite() || script.duration < 0.0 {
        bail!("script needs fps > 0 and a non-negative duration");
    }
    script
        .events
        .sort_by(|a, b| a.at.partial_cmp(&b.at).unwrap_or(std::cmp::Ordering::Equal));

    let clock = ManualClock::new();
    let mut session = GameSession::new(config, clock.clone())?;
    if script.auto_start {
        session.start();
        session.capture_granted();
    }

    let dt = 1.0 / f64::from(script.fps);
    let frames = (script.duration * f64::from(script.fps)).round() as u64;
    log::info!(
        "Replaying '{}' ({} events, {} frames at {} fps)",
        script_path,
        script.events.len(),
        frames,
        script.fps
    );

    let mut pending = script.events.iter().peekable();
    for frame in 1..=frames {
        let t = frame as f64 * dt;

        while let Some(timed) = pending.next_if(|e| e.at <= t) {
            clock.set(timed.at);
            apply(&mut session, &timed.event);
        }

        clock.set(t);
        let transform = session.frame(dt as f32);
        let on_ground = session.controller().state().on_ground;
        print_frame(t, transform, on_ground);
    }

    Ok(())
}
