use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Loading", inline)]
#[serde(default)]
/// Distances used when asking the loader for objects.
pub struct LoadingOptions {
    /// Extra margin around the camera view for camera-driven loads.
    #[schemars(title = "View Margin", range(min = 0.0, max = 500.0), extend("step" = 10.0))]
    pub camera_extra: f32,
    /// Objects farther than this from the eye are hidden after a
    /// camera-driven load.
    #[schemars(title = "Hide Distance", range(min = 100.0, max = 5000.0), extend("step" = 50.0))]
    pub hide_distance: f32,
    /// Margin added around the visible rectangle for full region loads.
    #[schemars(title = "Region Margin", range(min = 0.0, max = 1000.0), extend("step" = 10.0))]
    pub region_margin: f32,
    /// Objects farther than this are hidden after a full region load.
    #[schemars(title = "Region Hide Distance", range(min = 100.0, max = 10000.0), extend("step" = 100.0))]
    pub region_hide_distance: f32,
    /// Radius of fast-follow loads while panning.
    #[schemars(title = "Follow Radius", range(min = 10.0, max = 1000.0), extend("step" = 10.0))]
    pub follow_radius: f32,
    /// Distance travelled between two fast-follow loads.
    #[schemars(title = "Follow Threshold", range(min = 1.0, max = 500.0), extend("step" = 1.0))]
    pub follow_threshold: f32,
}

impl Default for LoadingOptions {
    fn default() -> Self {
        Self {
            camera_extra: 100.0,
            hide_distance: 1000.0,
            region_margin: 200.0,
            region_hide_distance: 2000.0,
            follow_radius: 150.0,
            follow_threshold: 50.0,
        }
    }
}
