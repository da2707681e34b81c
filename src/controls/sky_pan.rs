//! Top-down view: each directional key press pans one fixed step, the
//! wheel changes altitude.

use glam::Vec3;
use log::debug;

use super::{zoomed_altitude, ControlMode, ModeContext, ModeKind};
use crate::input::{InputEvent, InputKind, WheelNormalizer};
use crate::load::LoadPolicy;
use crate::options::{KeybindingOptions, Options, SkyPanOptions};

const LISTENS_TO: &[InputKind] = &[InputKind::KeyDown, InputKind::Wheel];

/// Sky pan mode strategy.
#[derive(Debug, Clone)]
pub struct SkyPanMode {
    options: SkyPanOptions,
    keys: KeybindingOptions,
    policy: LoadPolicy,
    wheel: WheelNormalizer,
}

impl SkyPanMode {
    /// Sky pan mode configured from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            options: options.sky_pan.clone(),
            keys: options.sky_pan.keys.clone(),
            policy: LoadPolicy::new(options.loading.clone()),
            wheel: WheelNormalizer::new(),
        }
    }
}

impl ControlMode for SkyPanMode {
    fn kind(&self) -> ModeKind {
        ModeKind::SkyPan
    }

    fn listens_to(&self) -> &'static [InputKind] {
        LISTENS_TO
    }

    fn follows_view_signal(&self) -> bool {
        true
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
            InputEvent::Key {
                ref code,
                pressed: true,
            } => {
                if let Some(action) = self.keys.lookup(code) {
                    let step = action.axis() * self.options.pan_step;
                    ctx.camera.translate(step.extend(0.0));
                }
            }
            InputEvent::Scroll { delta_y } => {
                let notches = self.wheel.normalize(delta_y);
                let camera = &mut *ctx.camera;
                camera.eye.z = zoomed_altitude(
                    camera.eye.z,
                    notches,
                    self.options.zoom_by_delta,
                    self.options.min_z,
                    self.options.max_z,
                );
                camera.look_down();
                debug!("sky pan: altitude {}", camera.eye.z);
            }
            _ => {}
        }
    }

    fn advance(&mut self, _dt: f32, _ctx: &mut ModeContext<'_>) {}

    fn view_changed(&mut self, ctx: &mut ModeContext<'_>) {
        let plan = self.policy.on_view_signal(ctx.camera);
        ctx.run_plan(&plan);
    }
}
