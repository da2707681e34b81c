//! RTS-style top-down view: pushing the pointer against a viewport edge
//! pans continuously, the wheel changes altitude, and a click recenters on
//! whatever the pointer hits.
//!
//! Loading follows the motion status. While moving, small follow loads
//! are issued every few tens of units travelled; the moment motion stops
//! (or the altitude changes, or the view jumps) the whole visible region
//! is loaded once and far objects are hidden.

use glam::{Vec2, Vec3};
use log::{debug, trace};

use super::status::{MotionStatus, MotionTrigger};
use super::{zoomed_altitude, ControlMode, ModeContext, ModeKind};
use crate::camera::{Ray, Viewport};
use crate::input::{InputEvent, InputKind, InputState};
use crate::load::{LoadPolicy, ViewChangeNotifier};
use crate::options::{Options, RtsOptions};

const LISTENS_TO: &[InputKind] = &[
    InputKind::PointerMove,
    InputKind::PointerLeave,
    InputKind::Wheel,
    InputKind::Click,
];

/// RTS edge-pan mode strategy.
#[derive(Debug, Clone)]
pub struct RtsMode {
    options: RtsOptions,
    policy: LoadPolicy,
    notifier: ViewChangeNotifier,
    input: InputState,
    /// Edge push direction in world axes (`x` east, `y` north).
    push: Vec2,
    status: MotionStatus,
}

impl RtsMode {
    /// RTS mode configured from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let policy = LoadPolicy::new(options.loading.clone());
        Self {
            options: options.rts.clone(),
            notifier: ViewChangeNotifier::new(policy.follow_threshold()),
            policy,
            input: InputState::new(),
            push: Vec2::ZERO,
            status: MotionStatus::Idle,
        }
    }

    /// Edge push for a pointer at `pointer`. An unsized viewport has no
    /// edges.
    fn edge_push(&self, pointer: Vec2, viewport: Viewport) -> Vec2 {
        if viewport.is_empty() {
            return Vec2::ZERO;
        }
        let m = self.options.edge_margin_px;
        let mut push = Vec2::ZERO;
        if pointer.x < m {
            push.x -= 1.0;
        }
        if pointer.x > viewport.width - m {
            push.x += 1.0;
        }
        // Top of the screen is north.
        if pointer.y < m {
            push.y += 1.0;
        }
        if pointer.y > viewport.height - m {
            push.y -= 1.0;
        }
        push
    }

    fn transition(&mut self, trigger: MotionTrigger) {
        let next = self.status.next(trigger);
        if next != self.status {
            debug!("rts: {:?} -> {next:?}", self.status);
            self.status = next;
        }
    }

    fn set_push(&mut self, push: Vec2, ctx: &mut ModeContext<'_>) {
        self.push = push;
        if push == Vec2::ZERO {
            ctx.stop_motion();
            if self.status == MotionStatus::Moving {
                self.transition(MotionTrigger::Release);
                self.full_load(ctx);
            }
        } else {
            ctx.start_motion();
        }
    }

    /// Load the whole visible region for a pending full-load status.
    fn full_load(&mut self, ctx: &mut ModeContext<'_>) {
        if !self.status.wants_full_load() {
            return;
        }
        let plan = self
            .policy
            .for_status(self.status, ctx.camera, ctx.viewport, None);
        ctx.run_plan(&plan);
        self.notifier.reset();
        self.transition(MotionTrigger::LoadComplete);
    }

    /// Ground point under the pointer, if the pointer is known and its
    /// ray reaches the ground.
    fn focus(&self, ctx: &ModeContext<'_>) -> Option<Vec3> {
        let pointer = self.input.pointer?;
        Ray::from_screen(ctx.camera, ctx.viewport, pointer.x, pointer.y)?
            .intersect_ground(0.0)
    }

    fn zoom(&mut self, delta_y: f32, ctx: &mut ModeContext<'_>) {
        let notches = self.input.wheel.normalize(delta_y);
        if notches == 0.0 {
            return;
        }
        let camera = &mut *ctx.camera;
        camera.eye.z = zoomed_altitude(
            camera.eye.z,
            notches,
            self.options.zoom_by_delta,
            self.options.min_z,
            self.options.max_z,
        );
        camera.look_down();
        self.transition(MotionTrigger::Wheel);
        self.full_load(ctx);
    }

    fn recenter(&mut self, x: f32, y: f32, ctx: &mut ModeContext<'_>) {
        let Some(ray) = Ray::from_screen(ctx.camera, ctx.viewport, x, y) else {
            return;
        };
        let Some(hit) = ctx.floor.first_hit(&ray) else {
            trace!("rts: click at ({x}, {y}) hit nothing");
            return;
        };
        let camera = &mut *ctx.camera;
        camera.eye.x = hit.x;
        camera.eye.y = hit.y;
        camera.look_down();
        self.transition(MotionTrigger::Recenter);
        self.full_load(ctx);
    }
}

impl ControlMode for RtsMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Rts
    }

    fn listens_to(&self) -> &'static [InputKind] {
        LISTENS_TO
    }

    fn bind(&mut self, ctx: &mut ModeContext<'_>) {
        let camera = &mut *ctx.camera;
        camera.up = Vec3::Y;
        camera.znear = self.options.znear;
        camera.zfar = self.options.zfar;
        camera.eye.z = camera.eye.z.clamp(self.options.min_z, self.options.max_z);
        camera.look_down();
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        match *event {
            InputEvent::CursorMoved { x, y } => {
                let pointer = Vec2::new(x, y);
                self.input.pointer = Some(pointer);
                let push = self.edge_push(pointer, ctx.viewport);
                if push != self.push {
                    self.set_push(push, ctx);
                }
            }
            InputEvent::CursorLeft => {
                self.input.clear_pointer();
                self.set_push(Vec2::ZERO, ctx);
            }
            InputEvent::Scroll { delta_y } => self.zoom(delta_y, ctx),
            InputEvent::Click { x, y } => self.recenter(x, y, ctx),
            _ => {}
        }
    }

    fn advance(&mut self, _dt: f32, ctx: &mut ModeContext<'_>) {
        if self.push == Vec2::ZERO {
            return;
        }
        let speed =
            self.options.speed * ctx.camera.eye.z / self.options.altitude_divisor;
        let step = self.push * speed;
        ctx.camera.translate(step.extend(0.0));
        self.transition(MotionTrigger::Push);
        trace!("rts: eye {}", ctx.camera.eye);

        if self.notifier.accumulate(step.length()) {
            let focus = self.focus(ctx);
            let plan =
                self.policy
                    .for_status(self.status, ctx.camera, ctx.viewport, focus);
            ctx.run_plan(&plan);
        }
    }

    fn status(&self) -> Option<MotionStatus> {
        Some(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraState, FlatFloor, FloorProbe, NoFloor};
    use crate::controls::FrameLoop;
    use crate::testing::{LoaderCall, MockPlatform, RecordingLoader};

    struct Rig {
        camera: CameraState,
        platform: MockPlatform,
        loader: RecordingLoader,
        frames: FrameLoop,
        viewport: Viewport,
        mode: RtsMode,
    }

    impl Rig {
        fn new() -> Self {
            let mut rig = Self {
                camera: CameraState {
                    aspect: 800.0 / 600.0,
                    ..CameraState::at(Vec3::new(0.0, 0.0, 150.0))
                },
                platform: MockPlatform::default(),
                loader: RecordingLoader::default(),
                frames: FrameLoop::new(),
                viewport: Viewport::new(800.0, 600.0),
                mode: RtsMode::new(&Options::default()),
            };
            rig.with(&NoFloor, |mode, ctx| mode.bind(ctx));
            rig
        }

        fn with(
            &mut self,
            floor: &dyn FloorProbe,
            f: impl FnOnce(&mut RtsMode, &mut ModeContext<'_>),
        ) {
            let mut ctx = ModeContext::new(
                &mut self.camera,
                self.viewport,
                floor,
                &mut self.loader,
                &mut self.platform,
                &mut self.frames,
            );
            f(&mut self.mode, &mut ctx);
        }

        fn send(&mut self, event: InputEvent) {
            self.with(&NoFloor, |mode, ctx| mode.handle_input(&event, ctx));
        }

        fn tick(&mut self) {
            self.with(&NoFloor, |mode, ctx| mode.advance(1.0 / 60.0, ctx));
        }
    }

    #[test]
    fn pointer_in_the_middle_schedules_nothing() {
        let mut rig = Rig::new();
        for x in [100.0, 400.0, 700.0] {
            rig.send(InputEvent::CursorMoved { x, y: 300.0 });
        }
        assert_eq!(rig.platform.frames_requested, 0);
        assert_eq!(rig.mode.status(), Some(MotionStatus::Idle));
    }

    #[test]
    fn unsized_viewport_has_no_edges() {
        let mut rig = Rig::new();
        rig.viewport = Viewport::default();
        rig.send(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        rig.tick();
        assert_eq!(rig.platform.frames_requested, 0);
        assert_eq!(rig.camera.eye, Vec3::new(0.0, 0.0, 150.0));
        assert_eq!(rig.mode.input.pointer_delta, Vec2::ZERO);
    }

    #[test]
    fn reaching_an_edge_schedules_exactly_one_frame() {
        let mut rig = Rig::new();
        rig.send(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        rig.send(InputEvent::CursorMoved { x: 795.0, y: 300.0 });
        rig.send(InputEvent::CursorMoved { x: 798.0, y: 300.0 });
        assert_eq!(rig.platform.frames_requested, 1);
        assert_eq!(rig.platform.outstanding_frames(), 1);
    }

    #[test]
    fn push_then_release_loads_once_and_settles() {
        let mut rig = Rig::new();
        rig.send(InputEvent::CursorMoved { x: 795.0, y: 300.0 });
        rig.tick();
        assert_eq!(rig.mode.status(), Some(MotionStatus::Moving));
        // 1.5 * 150 / 15 per tick, due east.
        assert!((rig.camera.eye.x - 15.0).abs() < 1e-4);
        assert!(rig.loader.calls.is_empty());

        rig.send(InputEvent::CursorMoved { x: 400.0, y: 300.0 });
        assert_eq!(rig.mode.status(), Some(MotionStatus::Stopped));
        assert_eq!(rig.platform.outstanding_frames(), 0);
        assert!(matches!(rig.loader.calls[0], LoaderCall::LoadRegion(region)
            if region.contains(rig.camera.ground_position())));
        assert!(matches!(
            rig.loader.calls[1],
            LoaderCall::IdsAway { distance, .. } if distance == 2000.0
        ));
    }

    #[test]
    fn top_edge_pans_north() {
        let mut rig = Rig::new();
        rig.send(InputEvent::CursorMoved { x: 400.0, y: 2.0 });
        rig.tick();
        assert!(rig.camera.eye.y > 0.0);
        assert_eq!(rig.camera.eye.x, 0.0);
    }

    #[test]
    fn sustained_motion_issues_follow_loads() {
        let mut rig = Rig::new();
        rig.send(InputEvent::CursorMoved { x: 795.0, y: 300.0 });
        // 15 units per tick, threshold 50: the fourth tick crosses it.
        for _ in 0..4 {
            rig.tick();
        }
        let follows: Vec<_> = rig
            .loader
            .calls
            .iter()
            .filter(|call| matches!(call, LoaderCall::IdsAround { .. }))
            .collect();
        assert_eq!(follows.len(), 1);
        let LoaderCall::IdsAround { point, distance } = follows[0] else {
            unreachable!();
        };
        assert_eq!(*distance, 150.0);
        // Centred under the pointer, east of the eye.
        assert!(point.x > rig.camera.eye.x);
    }

    #[test]
    fn leaving_the_viewport_stops_motion() {
        let mut rig = Rig::new();
        rig.send(InputEvent::CursorMoved { x: 5.0, y: 5.0 });
        rig.tick();
        rig.send(InputEvent::CursorLeft);
        assert_eq!(rig.platform.outstanding_frames(), 0);
        assert_eq!(rig.mode.status(), Some(MotionStatus::Stopped));
    }

    #[test]
    fn wheel_scrolls_then_stops() {
        let mut rig = Rig::new();
        rig.send(InputEvent::Scroll { delta_y: -120.0 });
        assert_eq!(rig.camera.eye.z, 125.0);
        assert_eq!(rig.mode.status(), Some(MotionStatus::Stopped));
        assert!(matches!(rig.loader.calls[0], LoaderCall::LoadRegion(_)));
    }

    #[test]
    fn click_on_nothing_is_a_no_op() {
        let mut rig = Rig::new();
        let before = rig.camera;
        rig.send(InputEvent::Click { x: 100.0, y: 100.0 });
        assert_eq!(rig.camera, before);
        assert!(rig.loader.calls.is_empty());
        assert_eq!(rig.mode.status(), Some(MotionStatus::Idle));
    }

    #[test]
    fn click_on_ground_recenters() {
        let mut rig = Rig::new();
        let floor = FlatFloor(0.0);
        rig.with(&floor, |mode, ctx| {
            mode.handle_input(&InputEvent::Click { x: 400.0, y: 0.0 }, ctx);
        });
        assert!(rig.camera.eye.y > 0.0);
        assert!(rig.camera.eye.x.abs() < 1e-3);
        assert_eq!(rig.camera.eye.z, 150.0);
        assert_eq!(rig.mode.status(), Some(MotionStatus::Stopped));
        assert!(matches!(rig.loader.calls[0], LoaderCall::LoadRegion(_)));
    }
}
