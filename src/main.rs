//! Replays a recorded input script against a camera-control session and
//! logs what the camera and the loader did.
//!
//! ```text
//! city-controls --mode rts --floor 0 session.json
//! ```
//!
//! The script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "step": "resize", "width": 1280, "height": 720 },
//!   { "step": "input", "event": { "type": "cursor_moved", "x": 1279, "y": 360 } },
//!   { "step": "frames", "count": 30, "interval_ms": 16 },
//!   { "step": "view_changed" }
//! ]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use city_controls::camera::{FlatFloor, ViewRect};
use city_controls::controls::{
    CameraControls, FrameHandle, ListenerId, Platform, SubscriptionId,
};
use city_controls::input::{InputEvent, InputKind};
use city_controls::load::{ObjectId, ObjectLoader};
use city_controls::{CameraState, ControlsError, ModeKind, Options};
use clap::Parser;
use glam::Vec3;
use serde::Deserialize;
use web_time::Instant;

#[derive(Parser, Debug, Clone)]
#[command(name = "city-controls")]
#[command(about = "Replay an input script against a camera control mode", long_about = None)]
struct Cli {
    /// Control mode: walk, free_fly, sky_pan or rts
    #[arg(long, default_value = "rts")]
    mode: String,

    /// Options preset (TOML)
    #[arg(long)]
    options: Option<PathBuf>,

    /// Height of the flat floor under the whole city
    #[arg(long, default_value_t = 0.0)]
    floor: f32,

    /// JSON script of replay steps
    script: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
enum Step {
    Input { event: InputEvent },
    Frames {
        count: u32,
        #[serde(default = "default_interval")]
        interval_ms: u64,
    },
    ViewChanged,
    Resize { width: f32, height: f32 },
}

const fn default_interval() -> u64 {
    16
}

/// Headless platform: frames are queued and fired by the replay loop.
#[derive(Debug, Default)]
struct ReplayPlatform {
    next_id: u64,
    pending: Option<FrameHandle>,
    listeners: usize,
    locked: bool,
}

impl ReplayPlatform {
    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Platform for ReplayPlatform {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next());
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn add_listener(&mut self, kind: InputKind) -> ListenerId {
        log::debug!("listening for {}", kind.dom_event_name());
        self.listeners += 1;
        ListenerId(self.next())
    }

    fn remove_listener(&mut self, _id: ListenerId) {
        self.listeners = self.listeners.saturating_sub(1);
    }

    fn subscribe_view_change(&mut self) -> SubscriptionId {
        SubscriptionId(self.next())
    }

    fn unsubscribe_view_change(&mut self, _id: SubscriptionId) {}

    fn request_pointer_lock(&mut self) -> bool {
        self.locked = true;
        true
    }

    fn exit_pointer_lock(&mut self) {
        self.locked = false;
    }

    fn pointer_locked(&self) -> bool {
        self.locked
    }
}

/// Loader that logs every request and invents one object per call.
#[derive(Debug, Default)]
struct LoggingLoader {
    next_id: u64,
    requests: usize,
}

impl LoggingLoader {
    fn invent(&mut self) -> Vec<ObjectId> {
        self.next_id += 1;
        vec![ObjectId(self.next_id)]
    }
}

impl ObjectLoader for LoggingLoader {
    fn ids_around_point(&mut self, point: Vec3, distance: f32) -> Vec<ObjectId> {
        log::info!("ids around {point} within {distance}");
        self.invent()
    }

    fn ids_from_camera(&mut self, camera: &CameraState, extra: f32) -> Vec<ObjectId> {
        log::info!("ids seen from {} (+{extra})", camera.eye);
        self.invent()
    }

    fn ids_away_from_point(&mut self, point: Vec3, distance: f32) -> Vec<ObjectId> {
        log::info!("ids farther than {distance} from {point}");
        Vec::new()
    }

    fn load_objects(&mut self, ids: &[ObjectId]) {
        self.requests += 1;
        log::info!("load {} objects", ids.len());
    }

    fn load_region(&mut self, region: &ViewRect) {
        self.requests += 1;
        log::info!(
            "load region S{:.1} N{:.1} W{:.1} E{:.1}",
            region.south,
            region.north,
            region.west,
            region.east
        );
    }

    fn hide_objects(&mut self, ids: &[ObjectId]) {
        log::info!("hide {} objects", ids.len());
    }
}

type Replay = CameraControls<ReplayPlatform, LoggingLoader, FlatFloor>;

fn run_frames(controls: &mut Replay, clock: &mut Instant, count: u32, interval: Duration) {
    for _ in 0..count {
        let Some(handle) = controls.platform_mut().pending.take() else {
            log::debug!("no frame pending, skipping the rest");
            return;
        };
        *clock += interval;
        controls.frame(handle, *clock);
    }
}

fn run(cli: &Cli) -> Result<(), ControlsError> {
    let mode: ModeKind = cli.mode.parse()?;
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script = std::fs::read_to_string(&cli.script)?;
    let steps: Vec<Step> =
        serde_json::from_str(&script).map_err(|e| ControlsError::Script(e.to_string()))?;

    let mut controls = CameraControls::new(
        ReplayPlatform::default(),
        LoggingLoader::default(),
        FlatFloor(cli.floor),
        options,
    );
    controls.resize(1280.0, 720.0);
    controls.activate(mode);
    log::info!("{mode} mode bound {} listeners", controls.platform().listeners);

    let mut clock = Instant::now();
    for step in steps {
        match step {
            Step::Input { event } => controls.handle_event(&event),
            Step::Frames { count, interval_ms } => run_frames(
                &mut controls,
                &mut clock,
                count,
                Duration::from_millis(interval_ms),
            ),
            Step::ViewChanged => controls.view_changed(),
            Step::Resize { width, height } => controls.resize(width, height),
        }
    }

    let camera = controls.camera();
    log::info!("final eye {} target {}", camera.eye, camera.target);
    if let Some(status) = controls.motion_status() {
        log::info!("final status {status:?}");
    }
    log::info!("{} load requests", controls.loader().requests);
    controls.deactivate();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
