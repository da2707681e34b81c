use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Walk", inline)]
#[serde(default)]
/// First-person walk: look by pointer offset, walk while the button is
/// held.
pub struct WalkOptions {
    /// Eye height above the floor.
    #[schemars(title = "Eye Height", range(min = 0.5, max = 5.0), extend("step" = 0.1))]
    pub eye_height: f32,
    /// Fraction of the horizontal look vector walked per tick.
    #[schemars(title = "Walking Speed", range(min = 0.01, max = 0.2), extend("step" = 0.01))]
    pub walking_speed: f32,
    /// Distance from the eye to the look-at point.
    #[schemars(skip)]
    pub look_distance: f32,
    /// Maximum yaw per pointer event, in radians.
    #[schemars(title = "Turn Speed", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub max_yaw_speed: f32,
    /// Maximum pitch, in radians.
    #[schemars(title = "Tilt Speed", range(min = 0.005, max = 0.1), extend("step" = 0.005))]
    pub max_pitch_speed: f32,
    /// Vertical reach of the look-at point: its height above the eye is
    /// `pitch_reach * sin(pitch)`.
    #[schemars(skip)]
    pub pitch_reach: f32,
    /// Horizontal dead zone as a fraction of viewport width.
    #[schemars(skip)]
    pub dead_zone_x: f32,
    /// Vertical dead zone as a fraction of viewport height.
    #[schemars(skip)]
    pub dead_zone_y: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            eye_height: 1.8,
            walking_speed: 0.05,
            look_distance: 20.0,
            max_yaw_speed: PI / 100.0,
            max_pitch_speed: PI / 120.0,
            pitch_reach: 400.0,
            dead_zone_x: 0.1,
            dead_zone_y: 0.05,
            znear: 1.0,
            zfar: 50.0,
        }
    }
}
