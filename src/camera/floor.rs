use glam::Vec3;

use super::ray::Ray;

/// Height from which floor probes are cast downward.
pub const PROBE_ALTITUDE: f32 = 10_000.0;

/// Surface queries against the loaded scene geometry.
///
/// Implemented by the host, which owns the scene. Both queries may miss;
/// callers treat a miss as "leave the camera where it is".
pub trait FloorProbe {
    /// Height of the first surface below `(x, y)` when probing down from
    /// [`PROBE_ALTITUDE`], or `None` if the probe hits nothing.
    fn height_below(&self, x: f32, y: f32) -> Option<f32>;

    /// First scene intersection along `ray`. The default implementation
    /// reports no hit.
    fn first_hit(&self, _ray: &Ray) -> Option<Vec3> {
        None
    }
}

/// Infinite horizontal floor at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatFloor(pub f32);

impl FloorProbe for FlatFloor {
    fn height_below(&self, _x: f32, _y: f32) -> Option<f32> {
        Some(self.0)
    }

    fn first_hit(&self, ray: &Ray) -> Option<Vec3> {
        ray.intersect_ground(self.0)
    }
}

/// Empty scene: every probe misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFloor;

impl FloorProbe for NoFloor {
    fn height_below(&self, _x: f32, _y: f32) -> Option<f32> {
        None
    }
}
