use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{SENSITIVITY, SPEED};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement, projection and control parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Movement speed in world units per second.
    #[schemars(
        title = "Move Speed",
        range(min = 0.5, max = 20.0),
        extend("step" = 0.5)
    )]
    pub movement_speed: f32,
    /// Mouse look sensitivity in degrees per pixel.
    #[schemars(
        title = "Mouse Sensitivity",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub mouse_sensitivity: f32,
    /// Keep pitch short of straight up/down.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            start_position: [0.0, 0.0, 3.0],
            znear: 0.1,
            zfar: 100.0,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            constrain_pitch: true,
        }
    }
}
