use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::KeybindingOptions;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sky View", inline)]
#[serde(default)]
/// Top-down view with stepwise key panning and wheel zoom.
pub struct SkyPanOptions {
    /// World units moved per key press.
    #[schemars(title = "Pan Step", range(min = 5.0, max = 200.0), extend("step" = 5.0))]
    pub pan_step: f32,
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
    /// Pan keys. Arrows only by default, so letter keys stay free for the
    /// host page.
    #[schemars(skip)]
    pub keys: KeybindingOptions,
}

impl Default for SkyPanOptions {
    fn default() -> Self {
        Self {
            pan_step: 50.0,
            zoom_by_delta: 25.0,
            min_z: 10.0,
            max_z: 500.0,
            znear: 1.0,
            zfar: 5000.0,
            keys: KeybindingOptions::arrows(),
        }
    }
}
