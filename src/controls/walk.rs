//! First-person walk: the pointer's offset from the viewport centre steers
//! the view, holding the primary button walks forward.

use glam::{Quat, Vec2, Vec3};
use log::{debug, trace};

use super::{ControlMode, ModeContext, ModeKind};
use crate::input::{InputEvent, InputKind, InputState, MouseButton};
use crate::load::LoadPolicy;
use crate::options::{Options, WalkOptions};

const LISTENS_TO: &[InputKind] = &[
    InputKind::PointerMove,
    InputKind::PointerDown,
    InputKind::PointerUp,
    InputKind::PointerLeave,
];

/// Walk mode strategy.
#[derive(Debug, Clone)]
pub struct WalkMode {
    options: WalkOptions,
    policy: LoadPolicy,
    input: InputState,
}

impl WalkMode {
    /// Walk mode configured from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            options: options.walk.clone(),
            policy: LoadPolicy::new(options.loading.clone()),
            input: InputState::new(),
        }
    }

    /// Signed fraction of the steering range covered by `offset`, zero
    /// inside the dead zone.
    fn steer_fraction(offset: f32, dead_zone: f32, half_extent: f32) -> f32 {
        let range = half_extent - dead_zone;
        if offset.abs() <= dead_zone || range <= 0.0 {
            return 0.0;
        }
        offset.signum() * ((offset.abs() - dead_zone) / range).min(1.0)
    }

    fn steer(&mut self, pointer: Vec2, ctx: &mut ModeContext<'_>) {
        let viewport = ctx.viewport;
        if viewport.is_empty() {
            return;
        }
        let offset = pointer - viewport.center();
        let yaw_fraction = Self::steer_fraction(
            offset.x,
            viewport.width * self.options.dead_zone_x,
            viewport.width / 2.0,
        );
        let pitch_fraction = Self::steer_fraction(
            offset.y,
            viewport.height * self.options.dead_zone_y,
            viewport.height / 2.0,
        );
        // Inside the dead zone the last heading and pitch hold.
        if yaw_fraction == 0.0 && pitch_fraction == 0.0 {
            return;
        }

        let camera = &mut *ctx.camera;
        if yaw_fraction != 0.0 {
            // Pointer right of centre turns clockwise seen from above.
            let yaw = -yaw_fraction * self.options.max_yaw_speed;
            let arm = Quat::from_rotation_z(yaw) * (camera.target - camera.eye);
            camera.target = camera.eye + arm;
        }
        // Screen y grows downward: pointer above centre looks up.
        let pitch = -pitch_fraction * self.options.max_pitch_speed;
        camera.target.z = camera.eye.z + self.options.pitch_reach * pitch.sin();
    }

    fn set_walking(&mut self, walking: bool, ctx: &mut ModeContext<'_>) {
        if self.input.dragging == walking {
            return;
        }
        self.input.dragging = walking;
        if walking {
            debug!("walk: moving forward");
            ctx.start_motion();
        } else {
            debug!("walk: stopped");
            ctx.stop_motion();
        }
    }
}

/// Snap the eye to `eye_height` above the floor under it, carrying the
/// target along. A missing floor leaves the camera untouched.
pub(crate) fn snap_to_floor(ctx: &mut ModeContext<'_>, eye_height: f32) {
    let eye = ctx.camera.eye;
    if let Some(height) = ctx.floor.height_below(eye.x, eye.y) {
        let dz = height + eye_height - eye.z;
        ctx.camera.eye.z += dz;
        ctx.camera.target.z += dz;
    }
}

impl ControlMode for WalkMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Walk
    }

    fn listens_to(&self) -> &'static [InputKind] {
        LISTENS_TO
    }

    fn follows_view_signal(&self) -> bool {
        true
    }

    fn bind(&mut self, ctx: &mut ModeContext<'_>) {
        let camera = &mut *ctx.camera;
        camera.up = Vec3::Z;
        camera.znear = self.options.znear;
        camera.zfar = self.options.zfar;
        let ground = camera.eye.truncate();
        camera.eye.z = ctx
            .floor
            .height_below(ground.x, ground.y)
            .map_or(self.options.eye_height, |h| h + self.options.eye_height);
        camera.target = camera.eye + Vec3::Y * self.options.look_distance;
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &mut ModeContext<'_>) {
        match *event {
            InputEvent::CursorMoved { x, y } => {
                let pointer = Vec2::new(x, y);
                self.input.pointer = Some(pointer);
                self.steer(pointer, ctx);
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => self.set_walking(pressed, ctx),
            InputEvent::CursorLeft => {
                self.input.pointer = None;
                self.set_walking(false, ctx);
            }
            _ => {}
        }
    }

    fn advance(&mut self, _dt: f32, ctx: &mut ModeContext<'_>) {
        if !self.input.dragging {
            return;
        }
        let look = ctx.camera.target - ctx.camera.eye;
        let step = Vec3::new(look.x, look.y, 0.0) * self.options.walking_speed;
        ctx.camera.translate(step);
        snap_to_floor(ctx, self.options.eye_height);
        trace!("walk: eye {}", ctx.camera.eye);
    }

    fn view_changed(&mut self, ctx: &mut ModeContext<'_>) {
        let plan = self.policy.on_view_signal(ctx.camera);
        ctx.run_plan(&plan);
    }
}
