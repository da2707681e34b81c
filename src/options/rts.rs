use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "RTS View", inline)]
#[serde(default)]
/// Top-down view panned by pushing the pointer against viewport edges.
pub struct RtsOptions {
    /// Edge band width in pixels. Inside the band the camera pans.
    #[schemars(title = "Edge Band", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub edge_margin_px: f32,
    /// Pan speed factor.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Altitude divisor: per-tick pan distance is
    /// `speed * altitude / altitude_divisor`.
    #[schemars(skip)]
    pub altitude_divisor: f32,
    /// Altitude change per normalized wheel notch.
    #[schemars(title = "Zoom Step", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub zoom_by_delta: f32,
    /// Lowest altitude.
    #[schemars(skip)]
    pub min_z: f32,
    /// Highest altitude.
    #[schemars(skip)]
    pub max_z: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for RtsOptions {
    fn default() -> Self {
        Self {
            edge_margin_px: 10.0,
            speed: 1.5,
            altitude_divisor: 15.0,
            zoom_by_delta: 25.0,
            min_z: 10.0,
            max_z: 500.0,
            znear: 1.0,
            zfar: 5000.0,
        }
    }
}
