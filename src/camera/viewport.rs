//! Visible ground region for a camera.
//!
//! Projects the four frustum corner rays onto the ground plane and takes
//! the axis-aligned bounds. Rays pointing above the horizon are clamped to
//! the far plane so the rectangle stays finite.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::core::CameraState;
use super::ray::Ray;

/// Size of the element the camera renders into, in pixels. The default
/// is an empty viewport.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width / height, or 1.0 for a degenerate viewport.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Whether either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Pixel position of the viewport centre.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Axis-aligned ground rectangle, in world units.
///
/// North is `+y`, east is `+x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    /// Minimum y.
    pub south: f32,
    /// Maximum y.
    pub north: f32,
    /// Maximum x.
    pub east: f32,
    /// Minimum x.
    pub west: f32,
}

impl ViewRect {
    /// Rectangle centred on `center` with the given full width and height.
    #[must_use]
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            south: center.y - height / 2.0,
            north: center.y + height / 2.0,
            east: center.x + width / 2.0,
            west: center.x - width / 2.0,
        }
    }

    /// Smallest rectangle containing every point.
    fn bounding(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Self>, p| {
            Some(match acc {
                None => Self {
                    south: p.y,
                    north: p.y,
                    east: p.x,
                    west: p.x,
                },
                Some(r) => Self {
                    south: r.south.min(p.y),
                    north: r.north.max(p.y),
                    east: r.east.max(p.x),
                    west: r.west.min(p.x),
                },
            })
        })
    }

    /// Grow every side outward by `margin`.
    #[must_use]
    pub fn inflate(self, margin: f32) -> Self {
        Self {
            south: self.south - margin,
            north: self.north + margin,
            east: self.east + margin,
            west: self.west - margin,
        }
    }

    /// Whether the point lies inside or on the border.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (self.west..=self.east).contains(&point.x)
            && (self.south..=self.north).contains(&point.y)
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    /// East-west extent.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.east - self.west
    }

    /// North-south extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.north - self.south
    }
}

/// Ground footprint (at `z = 0`) of everything the camera can see.
///
/// Always contains the point directly below the eye.
#[must_use]
pub fn visible_rect(camera: &CameraState, viewport: Viewport) -> ViewRect {
    let below_eye = camera.ground_position();
    if viewport.is_empty() {
        return ViewRect::centered(below_eye, 0.0, 0.0);
    }

    let corners = [
        (0.0, 0.0),
        (viewport.width, 0.0),
        (0.0, viewport.height),
        (viewport.width, viewport.height),
    ];
    let hits = corners.iter().filter_map(|&(x, y)| {
        let ray = Ray::from_screen(camera, viewport, x, y)?;
        Some(ground_or_far(&ray, camera.zfar))
    });

    ViewRect::bounding(hits.chain(std::iter::once(below_eye)))
        .unwrap_or_else(|| ViewRect::centered(below_eye, 0.0, 0.0))
}

fn ground_or_far(ray: &Ray, far: f32) -> Vec2 {
    match ray.intersect_ground(0.0) {
        Some(hit) if hit.distance(ray.origin) <= far => hit.truncate(),
        _ => {
            let flat = Vec3::new(ray.direction.x, ray.direction.y, 0.0)
                .try_normalize()
                .unwrap_or(Vec3::ZERO);
            (ray.origin + flat * far).truncate()
        }
    }
}
