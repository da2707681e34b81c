use log::{debug, trace};
use web_time::Instant;

use super::frame::FrameLoop;
use super::platform::{FrameHandle, ListenerId, Platform, SubscriptionId};
use super::status::MotionStatus;
use super::{ControlMode, ModeContext, ModeKind};
use crate::camera::{CameraState, FloorProbe, Viewport};
use crate::input::{InputEvent, InputKind};
use crate::load::ObjectLoader;
use crate::options::Options;

/// Everything bound for the currently active mode.
struct ActiveSession {
    mode: Box<dyn ControlMode>,
    listeners: Vec<(InputKind, ListenerId)>,
    view_subscription: Option<SubscriptionId>,
}

impl ActiveSession {
    fn listens_to(&self, kind: InputKind) -> bool {
        self.listeners.iter().any(|&(bound, _)| bound == kind)
    }
}

/// Owns the camera, its collaborators, and at most one active control
/// mode.
///
/// The host forwards input, animation frames, the camera's view-change
/// signal and resizes; the session routes them to the active mode and
/// keeps listener, frame and subscription bookkeeping balanced. Dropping
/// the session deactivates it.
///
/// # Example
///
/// ```ignore
/// let mut controls = CameraControls::new(platform, loader, floor, Options::default());
/// controls.resize(1280.0, 720.0);
/// controls.activate(ModeKind::Rts);
/// controls.handle_event(&InputEvent::CursorMoved { x: 1279.0, y: 360.0 });
/// // ... later, from the animation-frame callback:
/// controls.frame(handle, web_time::Instant::now());
/// ```
pub struct CameraControls<P: Platform, L: ObjectLoader, F: FloorProbe> {
    camera: CameraState,
    viewport: Viewport,
    platform: P,
    loader: L,
    floor: F,
    options: Options,
    frames: FrameLoop,
    session: Option<ActiveSession>,
}

impl<P: Platform, L: ObjectLoader, F: FloorProbe> CameraControls<P, L, F> {
    /// Inactive session with a default camera.
    #[must_use]
    pub fn new(platform: P, loader: L, floor: F, options: Options) -> Self {
        Self {
            camera: CameraState::default(),
            viewport: Viewport::default(),
            platform,
            loader,
            floor,
            options,
            frames: FrameLoop::new(),
            session: None,
        }
    }

    /// Start `kind`, ending any current mode first.
    pub fn activate(&mut self, kind: ModeKind) {
        self.deactivate();

        let mut mode = kind.build(&self.options);
        let listeners: Vec<_> = mode
            .listens_to()
            .iter()
            .map(|&input| (input, self.platform.add_listener(input)))
            .collect();
        let view_subscription = mode
            .follows_view_signal()
            .then(|| self.platform.subscribe_view_change());

        let mut ctx = ModeContext::new(
            &mut self.camera,
            self.viewport,
            &self.floor,
            &mut self.loader,
            &mut self.platform,
            &mut self.frames,
        );
        mode.bind(&mut ctx);
        debug!("activated {kind} mode");

        self.session = Some(ActiveSession {
            mode,
            listeners,
            view_subscription,
        });
    }

    /// End the active mode: unbind it, remove its listeners, release the
    /// view-change subscription and cancel any pending frame. Calling it
    /// with no active mode does nothing.
    pub fn deactivate(&mut self) {
        let Some(mut active) = self.session.take() else {
            return;
        };
        let mut ctx = ModeContext::new(
            &mut self.camera,
            self.viewport,
            &self.floor,
            &mut self.loader,
            &mut self.platform,
            &mut self.frames,
        );
        active.mode.unbind(&mut ctx);
        ctx.stop_motion();

        for (_, id) in active.listeners.drain(..) {
            self.platform.remove_listener(id);
        }
        if let Some(subscription) = active.view_subscription.take() {
            self.platform.unsubscribe_view_change(subscription);
        }
        debug!("deactivated {} mode", active.mode.kind());
    }

    /// Route an input event to the active mode, if it listens for the
    /// event's kind.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let Some(active) = self.session.as_mut() else {
            return;
        };
        if !active.listens_to(event.kind()) {
            return;
        }
        let mut ctx = ModeContext::new(
            &mut self.camera,
            self.viewport,
            &self.floor,
            &mut self.loader,
            &mut self.platform,
            &mut self.frames,
        );
        active.mode.handle_input(event, &mut ctx);
    }

    /// Animation-frame callback. Handles other than the pending one are
    /// ignored.
    pub fn frame(&mut self, handle: FrameHandle, now: Instant) {
        let Some(dt) = self.frames.fire(handle, now) else {
            trace!("ignoring stale frame {handle:?}");
            return;
        };
        if let Some(active) = self.session.as_mut() {
            let mut ctx = ModeContext::new(
                &mut self.camera,
                self.viewport,
                &self.floor,
                &mut self.loader,
                &mut self.platform,
                &mut self.frames,
            );
            active.mode.advance(dt, &mut ctx);
        }
        self.frames.resume(&mut self.platform);
    }

    /// The camera's own view-change signal. Forwarded only to modes that
    /// subscribed to it.
    pub fn view_changed(&mut self) {
        let Some(active) = self.session.as_mut() else {
            return;
        };
        if active.view_subscription.is_none() {
            return;
        }
        let mut ctx = ModeContext::new(
            &mut self.camera,
            self.viewport,
            &self.floor,
            &mut self.loader,
            &mut self.platform,
            &mut self.frames,
        );
        active.mode.view_changed(&mut ctx);
    }

    /// New viewport size in pixels. Updates the camera aspect ratio.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if !self.viewport.is_empty() {
            self.camera.aspect = self.viewport.aspect();
        }
    }

    /// The shared camera.
    #[must_use]
    pub const fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Mutable access to the camera, e.g. to place it before activation.
    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    /// Current viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Kind of the active mode, if any.
    #[must_use]
    pub fn active_mode(&self) -> Option<ModeKind> {
        self.session.as_ref().map(|active| active.mode.kind())
    }

    /// Motion status of the active mode, for modes that track one.
    #[must_use]
    pub fn motion_status(&self) -> Option<MotionStatus> {
        self.session.as_ref().and_then(|active| active.mode.status())
    }

    /// The object loader.
    #[must_use]
    pub const fn loader(&self) -> &L {
        &self.loader
    }

    /// The host platform.
    #[must_use]
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutable access to the host platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// The floor probe.
    #[must_use]
    pub const fn floor(&self) -> &F {
        &self.floor
    }

    /// Options used to build modes.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options. Takes effect on the next
    /// [`activate`](Self::activate).
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }
}

impl<P: Platform, L: ObjectLoader, F: FloorProbe> Drop for CameraControls<P, L, F> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
