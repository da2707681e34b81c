//! Camera state and the geometric queries made against it.
//!
//! Provides the shared perspective camera, the visible ground region
//! (viewport query), picking rays, and the floor-probe interface used to
//! keep walking cameras above terrain.

/// Core camera struct.
pub mod core;
/// Floor-probe interface and trivial implementations.
pub mod floor;
/// Picking and probing rays.
pub mod ray;
/// Viewport size and visible ground rectangle.
pub mod viewport;

pub use self::core::CameraState;
pub use floor::{FlatFloor, FloorProbe, NoFloor};
pub use ray::Ray;
pub use viewport::{visible_rect, ViewRect, Viewport};
