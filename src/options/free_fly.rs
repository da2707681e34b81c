use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Fly", inline)]
#[serde(default)]
/// Pointer-lock free look with held-key movement.
pub struct FreeFlyOptions {
    /// Eye height above the floor.
    #[schemars(title = "Eye Height", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub eye_height: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Body Speed", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub body_speed: f32,
    /// Yaw radians per pointer unit.
    #[schemars(title = "Yaw Sensitivity", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub yaw_speed: f32,
    /// Pitch radians per pointer unit.
    #[schemars(title = "Pitch Sensitivity", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub pitch_speed: f32,
    /// Maximum pitch above or below the horizon, in degrees.
    #[schemars(skip)]
    pub max_pitch_deg: f32,
    /// Initial distance from the eye to the look-at point.
    #[schemars(skip)]
    pub look_distance: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for FreeFlyOptions {
    fn default() -> Self {
        Self {
            eye_height: 1.8,
            body_speed: 5.0,
            yaw_speed: 0.005,
            pitch_speed: 0.005,
            max_pitch_deg: 85.0,
            look_distance: 20.0,
            znear: 1.0,
            zfar: 50.0,
        }
    }
}
