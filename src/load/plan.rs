//! Load policy: which objects to request, and which to hide, for a given
//! camera and motion status.

use glam::Vec3;

use super::loader::ObjectLoader;
use crate::camera::{visible_rect, CameraState, ViewRect, Viewport};
use crate::controls::MotionStatus;
use crate::options::LoadingOptions;

/// Objects to hide after a full load: everything farther than `distance`
/// from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eviction {
    /// Reference point, normally the camera eye.
    pub center: Vec3,
    /// Objects beyond this distance are hidden.
    pub distance: f32,
}

/// A single round of loader calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadPlan {
    /// Nothing to do.
    Idle,
    /// Fast partial load around a point, issued while the camera moves.
    Follow {
        /// Centre of the load square.
        center: Vec3,
        /// Half-side of the load square.
        radius: f32,
    },
    /// Load whatever the loader considers in view, then evict.
    Camera {
        /// Margin around the camera view.
        extra: f32,
        /// Eviction sweep after loading.
        evict: Eviction,
    },
    /// Load an explicit ground rectangle, then evict.
    Region {
        /// Rectangle to load, margin included.
        region: ViewRect,
        /// Eviction sweep after loading.
        evict: Eviction,
    },
}

impl LoadPlan {
    /// Whether executing the plan would call the loader.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Issue the plan's loader calls. Loads always precede evictions.
    pub fn execute(&self, camera: &CameraState, loader: &mut dyn ObjectLoader) {
        match *self {
            Self::Idle => {}
            Self::Follow { center, radius } => {
                let ids = loader.ids_around_point(center, radius);
                if !ids.is_empty() {
                    loader.load_objects(&ids);
                }
            }
            Self::Camera { extra, evict } => {
                let ids = loader.ids_from_camera(camera, extra);
                if !ids.is_empty() {
                    loader.load_objects(&ids);
                }
                Self::sweep(evict, loader);
            }
            Self::Region { region, evict } => {
                loader.load_region(&region);
                Self::sweep(evict, loader);
            }
        }
    }

    fn sweep(evict: Eviction, loader: &mut dyn ObjectLoader) {
        let far = loader.ids_away_from_point(evict.center, evict.distance);
        if !far.is_empty() {
            loader.hide_objects(&far);
        }
    }
}

/// Decides the load granularity for each notification.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPolicy {
    options: LoadingOptions,
}

impl LoadPolicy {
    /// Policy using the given distances.
    #[must_use]
    pub const fn new(options: LoadingOptions) -> Self {
        Self { options }
    }

    /// Distance the camera must travel between two fast-follow loads.
    #[must_use]
    pub const fn follow_threshold(&self) -> f32 {
        self.options.follow_threshold
    }

    /// Plan for the camera's own view-change signal: load what the loader
    /// sees from the camera, evict what is far from the eye.
    #[must_use]
    pub fn on_view_signal(&self, camera: &CameraState) -> LoadPlan {
        LoadPlan::Camera {
            extra: self.options.camera_extra,
            evict: Eviction {
                center: camera.eye,
                distance: self.options.hide_distance,
            },
        }
    }

    /// Plan for an explicit status-driven notification.
    ///
    /// `focus` is the ground point under the pointer, if known; fast
    /// follow loads centre on it, falling back to the point below the eye.
    #[must_use]
    pub fn for_status(
        &self,
        status: MotionStatus,
        camera: &CameraState,
        viewport: Viewport,
        focus: Option<Vec3>,
    ) -> LoadPlan {
        match status {
            MotionStatus::Moving => LoadPlan::Follow {
                center: focus.unwrap_or_else(|| camera.ground_position().extend(0.0)),
                radius: self.options.follow_radius,
            },
            MotionStatus::Stopping | MotionStatus::Scrolling => LoadPlan::Region {
                region: visible_rect(camera, viewport)
                    .inflate(self.options.region_margin),
                evict: Eviction {
                    center: camera.eye,
                    distance: self.options.region_hide_distance,
                },
            },
            MotionStatus::Idle | MotionStatus::Stopped => LoadPlan::Idle,
        }
    }
}
