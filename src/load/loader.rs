use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraState, ViewRect};

/// Identifier of a loadable scene object (a building).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ObjectId(pub u64);

/// Fetches objects into the scene and hides them again.
///
/// Implemented by the host's data layer, which owns the scene graph. All
/// calls are fire-and-forget from the camera's point of view: results
/// arrive asynchronously in the scene, and failures are the loader's to
/// handle.
pub trait ObjectLoader {
    /// Objects inside the square of half-side `distance` centred on
    /// `point`.
    fn ids_around_point(&mut self, point: Vec3, distance: f32) -> Vec<ObjectId>;

    /// Objects inside the camera's view, grown by `extra`.
    fn ids_from_camera(
        &mut self,
        camera: &CameraState,
        extra: f32,
    ) -> Vec<ObjectId>;

    /// Loaded objects farther than `distance` from `point`.
    fn ids_away_from_point(
        &mut self,
        point: Vec3,
        distance: f32,
    ) -> Vec<ObjectId>;

    /// Request objects by id.
    fn load_objects(&mut self, ids: &[ObjectId]);

    /// Request every object inside a ground rectangle.
    fn load_region(&mut self, region: &ViewRect);

    /// Hide (and let the loader evict) objects by id.
    fn hide_objects(&mut self, ids: &[ObjectId]);
}
