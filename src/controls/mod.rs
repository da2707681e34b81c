//! Camera control modes and the session that drives them.
//!
//! A [`CameraControls`] session owns the camera and its collaborators and
//! runs exactly one [`ControlMode`] at a time. Modes are small strategies:
//! they declare which input they listen to, react to events, integrate
//! motion on animation frames, and decide what to load.

mod frame;
mod free_fly;
mod platform;
mod rts;
mod session;
mod sky_pan;
mod status;
mod walk;

use std::fmt;
use std::str::FromStr;

pub use frame::{FrameLoop, MAX_FRAME, NOMINAL_FRAME};
pub use free_fly::FreeFlyMode;
pub use platform::{FrameHandle, ListenerId, Platform, SubscriptionId};
pub use rts::RtsMode;
use serde::{Deserialize, Serialize};
pub use session::CameraControls;
pub use sky_pan::SkyPanMode;
pub use status::{MotionStatus, MotionTrigger};
pub use walk::WalkMode;

use crate::camera::{CameraState, FloorProbe, Viewport};
use crate::error::ControlsError;
use crate::input::{InputEvent, InputKind};
use crate::load::{LoadPlan, ObjectLoader};
use crate::options::Options;

/// Which control mode a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeKind {
    /// First-person walk, steered by pointer offset.
    Walk,
    /// Pointer-lock free-fly with held movement keys.
    FreeFly,
    /// Top-down view panned in fixed key steps.
    SkyPan,
    /// Top-down view panned by pushing the pointer against the edges.
    Rts,
}

impl ModeKind {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 4] = [Self::Walk, Self::FreeFly, Self::SkyPan, Self::Rts];

    /// Stable lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::FreeFly => "free_fly",
            Self::SkyPan => "sky_pan",
            Self::Rts => "rts",
        }
    }

    /// Build a fresh strategy for this mode.
    #[must_use]
    pub fn build(self, options: &Options) -> Box<dyn ControlMode> {
        match self {
            Self::Walk => Box::new(WalkMode::new(options)),
            Self::FreeFly => Box::new(FreeFlyMode::new(options)),
            Self::SkyPan => Box::new(SkyPanMode::new(options)),
            Self::Rts => Box::new(RtsMode::new(options)),
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModeKind {
    type Err = ControlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ControlsError::UnknownMode(s.to_owned()))
    }
}

/// Everything a mode may touch while handling input or a frame.
///
/// Borrowed from the owning [`CameraControls`] for the duration of one
/// callback.
pub struct ModeContext<'a> {
    /// The shared camera.
    pub camera: &'a mut CameraState,
    /// Current viewport size.
    pub viewport: Viewport,
    /// Floor height queries.
    pub floor: &'a dyn FloorProbe,
    /// Object loading collaborator.
    pub loader: &'a mut dyn ObjectLoader,
    platform: &'a mut dyn Platform,
    frames: &'a mut FrameLoop,
}

impl<'a> ModeContext<'a> {
    pub(crate) fn new(
        camera: &'a mut CameraState,
        viewport: Viewport,
        floor: &'a dyn FloorProbe,
        loader: &'a mut dyn ObjectLoader,
        platform: &'a mut dyn Platform,
        frames: &'a mut FrameLoop,
    ) -> Self {
        Self {
            camera,
            viewport,
            floor,
            loader,
            platform,
            frames,
        }
    }

    /// Ask for animation frames until [`stop_motion`](Self::stop_motion).
    pub fn start_motion(&mut self) {
        self.frames.start(self.platform);
    }

    /// Stop animation frames and cancel the pending one.
    pub fn stop_motion(&mut self) {
        self.frames.stop(self.platform);
    }

    /// Whether frames are currently wanted.
    #[must_use]
    pub fn in_motion(&self) -> bool {
        self.frames.is_running()
    }

    /// Best-effort pointer lock. Returns whether it was granted.
    pub fn request_pointer_lock(&mut self) -> bool {
        self.platform.request_pointer_lock()
    }

    /// Release pointer lock.
    pub fn exit_pointer_lock(&mut self) {
        self.platform.exit_pointer_lock();
    }

    /// Whether pointer lock is currently engaged.
    #[must_use]
    pub fn pointer_locked(&self) -> bool {
        self.platform.pointer_locked()
    }

    /// Issue a load plan against the current camera.
    pub fn run_plan(&mut self, plan: &LoadPlan) {
        plan.execute(self.camera, self.loader);
    }
}

/// A camera control strategy.
///
/// The session calls [`bind`](Self::bind) once after registering the
/// listeners from [`listens_to`](Self::listens_to), then routes matching
/// events to [`handle_input`](Self::handle_input) and fired frames to
/// [`advance`](Self::advance). [`unbind`](Self::unbind) runs once on
/// deactivation, before listeners and frames are released.
pub trait ControlMode {
    /// Which mode this is.
    fn kind(&self) -> ModeKind;

    /// Input categories the mode needs listeners for.
    fn listens_to(&self) -> &'static [InputKind];

    /// Whether the mode reacts to the camera's own view-change signal.
    fn follows_view_signal(&self) -> bool {
        false
    }

    /// Apply the mode's initial camera settings.
    fn bind(&mut self, ctx: &mut ModeContext<'_>);

    /// React to one input event.
    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>);

    /// Integrate `dt` seconds of motion.
    fn advance(&mut self, dt: f32, ctx: &mut ModeContext<'_>);

    /// The camera reported a (debounced) view change.
    fn view_changed(&mut self, _ctx: &mut ModeContext<'_>) {}

    /// Release anything acquired in [`bind`](Self::bind).
    fn unbind(&mut self, _ctx: &mut ModeContext<'_>) {}

    /// Current motion classification, for modes that track one.
    fn status(&self) -> Option<MotionStatus> {
        None
    }
}

/// New altitude after `notches` of wheel input, clamped to
/// `[min_z, max_z]`.
#[must_use]
pub fn zoomed_altitude(z: f32, notches: f32, step: f32, min_z: f32, max_z: f32) -> f32 {
    (z + notches * step).clamp(min_z, max_z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_parse_back() {
        for kind in ModeKind::ALL {
            assert_eq!(kind.name().parse::<ModeKind>().unwrap(), kind);
        }
        assert_eq!("Free-Fly".parse::<ModeKind>().unwrap(), ModeKind::FreeFly);
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let err = "orbit".parse::<ModeKind>().unwrap_err();
        assert!(matches!(err, ControlsError::UnknownMode(name) if name == "orbit"));
    }

    #[test]
    fn zoom_stays_in_bounds() {
        for notches in [-1000.0, -3.0, -1.0, 0.0, 1.0, 7.5, 1e6] {
            for z in [10.0, 60.0, 500.0] {
                let zoomed = zoomed_altitude(z, notches, 25.0, 10.0, 500.0);
                assert!((10.0..=500.0).contains(&zoomed), "{z} {notches} -> {zoomed}");
            }
        }
        assert_eq!(zoomed_altitude(100.0, 2.0, 25.0, 10.0, 500.0), 150.0);
    }

    #[test]
    fn built_modes_report_their_kind() {
        let options = Options::default();
        for kind in ModeKind::ALL {
            assert_eq!(kind.build(&options).kind(), kind);
        }
    }
}
