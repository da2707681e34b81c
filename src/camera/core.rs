use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera defined by eye position, look-at target, and
/// projection parameters.
///
/// One instance is shared by whichever control mode is active; modes read
/// and mutate it in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 45.0,
            znear: 1.0,
            zfar: 5000.0,
        }
    }
}

impl CameraState {
    /// Camera placed at `eye`, looking straight down, with default
    /// projection parameters.
    #[must_use]
    pub fn at(eye: Vec3) -> Self {
        Self {
            eye,
            target: Vec3::new(eye.x, eye.y, 0.0),
            ..Self::default()
        }
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Unit vector from eye toward target. Falls back to `-Z` when the two
    /// coincide.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).try_normalize().unwrap_or(Vec3::NEG_Z)
    }

    /// Forward direction projected onto the ground plane and normalized.
    /// Looking straight down yields `+Y` (north).
    #[must_use]
    pub fn horizontal_forward(&self) -> Vec3 {
        let f = self.target - self.eye;
        Vec3::new(f.x, f.y, 0.0).try_normalize().unwrap_or(Vec3::Y)
    }

    /// Ground-plane position of the eye.
    #[must_use]
    pub fn ground_position(&self) -> Vec2 {
        self.eye.truncate()
    }

    /// Move eye and target together.
    pub fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.target += delta;
    }

    /// Point the camera at `target` from its current eye.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Point the camera straight down at the ground below its eye.
    pub fn look_down(&mut self) {
        self.target = Vec3::new(self.eye.x, self.eye.y, 0.0);
    }
}
