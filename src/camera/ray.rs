//! Ray construction for picking and floor probing.
//!
//! Rays can be cast from a screen position (through the camera's
//! projection), along the camera's view direction, or from an arbitrary
//! point.

use glam::Vec3;

use super::core::CameraState;
use super::viewport::Viewport;

/// A half-line in world space. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction`. A zero direction degrades to
    /// straight down.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    /// Ray from the camera eye along its view direction.
    #[must_use]
    pub fn from_view(camera: &CameraState) -> Self {
        Self::new(camera.eye, camera.forward())
    }

    /// Ray from the camera eye through the screen position `(x, y)`, given
    /// in pixels relative to the viewport's top-left corner.
    ///
    /// Returns `None` if the viewport is empty.
    #[must_use]
    pub fn from_screen(
        camera: &CameraState,
        viewport: Viewport,
        x: f32,
        y: f32,
    ) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }
        let ndc_x = (x / viewport.width) * 2.0 - 1.0;
        let ndc_y = -(y / viewport.height) * 2.0 + 1.0;

        let inverse = camera.build_matrix().inverse();
        let near = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inverse.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        let direction = (far - near).try_normalize()?;
        Some(Self {
            origin: camera.eye,
            direction,
        })
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersection with the horizontal plane at height `z`.
    ///
    /// Returns `None` for rays parallel to the plane or pointing away from
    /// it.
    #[must_use]
    pub fn intersect_ground(&self, z: f32) -> Option<Vec3> {
        if self.direction.z.abs() < f32::EPSILON {
            return None;
        }
        let t = (z - self.origin.z) / self.direction.z;
        (t >= 0.0).then(|| self.at(t))
    }
}
