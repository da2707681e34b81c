//! Pointer-lock free-fly: relative pointer motion turns the head, held
//! movement keys walk along the ground at a fixed body speed.

use glam::{Quat, Vec2, Vec3};
use log::{debug, trace, warn};

use super::walk::snap_to_floor;
use super::{ControlMode, ModeContext, ModeKind};
use crate::input::{InputEvent, InputKind, InputState};
use crate::load::LoadPolicy;
use crate::options::{FreeFlyOptions, KeybindingOptions, Options};

const LISTENS_TO: &[InputKind] =
    &[InputKind::PointerMove, InputKind::KeyDown, InputKind::KeyUp];

/// Free-fly mode strategy.
#[derive(Debug, Clone)]
pub struct FreeFlyMode {
    options: FreeFlyOptions,
    keys: KeybindingOptions,
    policy: LoadPolicy,
    input: InputState,
    pointer_locked: bool,
}

impl FreeFlyMode {
    /// Free-fly mode configured from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            options: options.free_fly.clone(),
            keys: options.keybindings.clone(),
            policy: LoadPolicy::new(options.loading.clone()),
            input: InputState::new(),
            pointer_locked: false,
        }
    }

    /// Whether pointer lock was granted on bind. The platform may still
    /// refuse or drop it later.
    #[must_use]
    pub const fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Turn the view by a pointer movement of `delta` pixels.
    ///
    /// Yaw spins the heading about the up axis; pitch tilts the view about
    /// the horizontal axis to its right. Elevation is clamped so the view
    /// never flips over the vertical.
    fn look(&self, delta: Vec2, ctx: &mut ModeContext<'_>) {
        if delta == Vec2::ZERO {
            return;
        }
        let camera = &mut *ctx.camera;
        let yaw = Quat::from_axis_angle(camera.up, -delta.x * self.options.yaw_speed);
        let heading = (yaw * camera.horizontal_forward())
            .with_z(0.0)
            .try_normalize()
            .unwrap_or(Vec3::Y);

        let max_pitch = self.options.max_pitch_deg.to_radians();
        let elevation = camera.forward().z.clamp(-1.0, 1.0).asin();
        let elevation = (elevation - delta.y * self.options.pitch_speed)
            .clamp(-max_pitch, max_pitch);

        let dir = heading * elevation.cos() + Vec3::Z * elevation.sin();
        camera.target = camera.eye + dir * self.options.look_distance;
    }
}

impl ControlMode for FreeFlyMode {
    fn kind(&self) -> ModeKind {
        ModeKind::FreeFly
    }

    fn listens_to(&self) -> &'static [InputKind] {
        LISTENS_TO
    }

    fn follows_view_signal(&self) -> bool {
        true
    }

    fn bind(&mut self, ctx: &mut ModeContext<'_>) {
        let camera = &mut *ctx.camera;
        let heading = camera.horizontal_forward();
        camera.up = Vec3::Z;
        camera.znear = self.options.znear;
        camera.zfar = self.options.zfar;
        let ground = camera.eye.truncate();
        camera.eye.z = ctx
            .floor
            .height_below(ground.x, ground.y)
            .map_or(self.options.eye_height, |h| h + self.options.eye_height);
        camera.target = camera.eye + heading * self.options.look_distance;

        self.pointer_locked = ctx.request_pointer_lock();
        if !self.pointer_locked {
            warn!("free fly: pointer lock unavailable, falling back to cursor deltas");
        }
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        match *event {
            InputEvent::PointerMotion { dx, dy } => {
                self.input.add_delta(Vec2::new(dx, dy));
                let delta = self.input.take_delta();
                self.look(delta, ctx);
            }
            InputEvent::CursorMoved { x, y } => {
                let _ = self.input.move_pointer(Vec2::new(x, y));
                let delta = self.input.take_delta();
                // While the lock is live, relative motion drives the view.
                if !ctx.pointer_locked() {
                    self.look(delta, ctx);
                }
            }
            InputEvent::Key { ref code, pressed } => {
                let Some(action) = self.keys.lookup(code) else {
                    return;
                };
                self.input.set_held(action, pressed);
                if self.input.held.any() {
                    ctx.start_motion();
                } else {
                    debug!("free fly: all movement keys released");
                    ctx.stop_motion();
                }
            }
            _ => {}
        }
    }

    fn advance(&mut self, dt: f32, ctx: &mut ModeContext<'_>) {
        let axis = self.input.held.axis();
        if axis == Vec2::ZERO {
            return;
        }
        let forward = ctx.camera.horizontal_forward();
        let right = forward.cross(ctx.camera.up);
        let step = (forward * axis.y + right * axis.x).normalize_or_zero()
            * self.options.body_speed
            * dt;
        ctx.camera.translate(step);
        snap_to_floor(ctx, self.options.eye_height);
        trace!("free fly: eye {}", ctx.camera.eye);
    }

    fn view_changed(&mut self, ctx: &mut ModeContext<'_>) {
        let plan = self.policy.on_view_signal(ctx.camera);
        ctx.run_plan(&plan);
    }

    fn unbind(&mut self, ctx: &mut ModeContext<'_>) {
        if self.pointer_locked {
            ctx.exit_pointer_lock();
            self.pointer_locked = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraState, FlatFloor, FloorProbe, NoFloor, Viewport};
    use crate::controls::FrameLoop;
    use crate::testing::{MockPlatform, RecordingLoader};

    struct Rig {
        camera: CameraState,
        platform: MockPlatform,
        loader: RecordingLoader,
        frames: FrameLoop,
    }

    impl Rig {
        fn new(grant_lock: bool) -> Self {
            Self {
                camera: CameraState {
                    eye: Vec3::new(0.0, 0.0, 1.8),
                    target: Vec3::new(0.0, 20.0, 1.8),
                    up: Vec3::Z,
                    ..CameraState::default()
                },
                platform: MockPlatform {
                    grant_pointer_lock: grant_lock,
                    ..MockPlatform::default()
                },
                loader: RecordingLoader::default(),
                frames: FrameLoop::new(),
            }
        }

        fn ctx<'a>(&'a mut self, floor: &'a dyn FloorProbe) -> ModeContext<'a> {
            ModeContext::new(
                &mut self.camera,
                Viewport::new(800.0, 600.0),
                floor,
                &mut self.loader,
                &mut self.platform,
                &mut self.frames,
            )
        }
    }

    fn bound(rig: &mut Rig) -> FreeFlyMode {
        let mut mode = FreeFlyMode::new(&Options::default());
        mode.bind(&mut rig.ctx(&NoFloor));
        mode
    }

    #[test]
    fn horizontal_motion_yaws_by_sensitivity() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        mode.handle_input(
            &InputEvent::PointerMotion { dx: 10.0, dy: 0.0 },
            &mut rig.ctx(&NoFloor),
        );
        // -0.05 rad about +Z turns north toward east.
        let dir = rig.camera.forward();
        let expected = Vec3::new(0.05_f32.sin(), 0.05_f32.cos(), 0.0);
        assert!((dir - expected).length() < 1e-5, "{dir}");
    }

    #[test]
    fn pitch_is_clamped() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        for _ in 0..10 {
            mode.handle_input(
                &InputEvent::PointerMotion { dx: 0.0, dy: -200.0 },
                &mut rig.ctx(&NoFloor),
            );
        }
        let elevation = rig.camera.forward().z.asin().to_degrees();
        assert!((elevation - 85.0).abs() < 1e-2, "{elevation}");
    }

    #[test]
    fn denied_pointer_lock_uses_cursor_deltas() {
        let mut rig = Rig::new(false);
        let mut mode = bound(&mut rig);
        assert!(!mode.pointer_locked());

        mode.handle_input(
            &InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            &mut rig.ctx(&NoFloor),
        );
        let before = rig.camera.forward();
        assert!((before - Vec3::Y).length() < 1e-5);
        mode.handle_input(
            &InputEvent::CursorMoved { x: 110.0, y: 100.0 },
            &mut rig.ctx(&NoFloor),
        );
        assert!(rig.camera.forward().x > 0.0);
    }

    #[test]
    fn lock_refused_after_request_still_turns_with_cursor() {
        // The platform accepts the request, then the lock never engages.
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        assert!(mode.pointer_locked());
        rig.platform.pointer_locked = false;

        mode.handle_input(
            &InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            &mut rig.ctx(&NoFloor),
        );
        mode.handle_input(
            &InputEvent::CursorMoved { x: 110.0, y: 100.0 },
            &mut rig.ctx(&NoFloor),
        );
        assert!(rig.camera.forward().x > 0.0);
    }

    #[test]
    fn engaged_lock_ignores_cursor_positions() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        for x in [100.0, 300.0] {
            mode.handle_input(
                &InputEvent::CursorMoved { x, y: 100.0 },
                &mut rig.ctx(&NoFloor),
            );
        }
        assert!((rig.camera.forward() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn granted_lock_is_released_on_unbind() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        assert!(rig.platform.pointer_locked);
        mode.unbind(&mut rig.ctx(&NoFloor));
        assert!(!rig.platform.pointer_locked);
    }

    #[test]
    fn held_forward_moves_at_body_speed() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        mode.handle_input(&InputEvent::key("KeyZ", true), &mut rig.ctx(&NoFloor));
        assert!(rig.frames.is_running());

        mode.advance(0.5, &mut rig.ctx(&NoFloor));
        assert!((rig.camera.eye - Vec3::new(0.0, 2.5, 1.8)).length() < 1e-5);

        mode.handle_input(&InputEvent::key("KeyZ", false), &mut rig.ctx(&NoFloor));
        assert!(!rig.frames.is_running());
        assert_eq!(rig.platform.outstanding_frames(), 0);
    }

    #[test]
    fn strafe_right_is_perpendicular_to_heading() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        mode.handle_input(&InputEvent::key("KeyD", true), &mut rig.ctx(&NoFloor));
        mode.advance(1.0, &mut rig.ctx(&NoFloor));
        assert!((rig.camera.eye - Vec3::new(5.0, 0.0, 1.8)).length() < 1e-5);
    }

    #[test]
    fn walking_onto_a_raised_floor_lifts_the_view() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        let floor = FlatFloor(3.0);
        mode.handle_input(&InputEvent::key("ArrowUp", true), &mut rig.ctx(&floor));
        mode.advance(0.1, &mut rig.ctx(&floor));
        assert!((rig.camera.eye.z - 4.8).abs() < 1e-5);
        assert!((rig.camera.target.z - 4.8).abs() < 1e-5);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut rig = Rig::new(true);
        let mut mode = bound(&mut rig);
        mode.handle_input(&InputEvent::key("KeyP", true), &mut rig.ctx(&NoFloor));
        assert_eq!(rig.platform.frames_requested, 0);
    }
}
