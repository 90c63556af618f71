use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Phong lighting parameters for the lighting demo.
pub struct LightingOptions {
    /// Specular shininess exponent.
    #[schemars(
        title = "Shininess",
        range(min = 2.0, max = 256.0),
        extend("step" = 1.0)
    )]
    pub shininess: f32,
    /// Directional light direction (need not be normalized).
    #[schemars(skip)]
    pub sun_direction: [f32; 3],
    /// Directional light color.
    #[schemars(skip)]
    pub sun_color: [f32; 3],
    /// Point light color, shared by every lamp.
    #[schemars(skip)]
    pub lamp_color: [f32; 3],
    /// Ambient share of each light's color.
    #[schemars(
        title = "Ambient",
        range(min = 0.0, max = 0.5),
        extend("step" = 0.01)
    )]
    pub ambient: f32,
    /// Specular share of each light's color.
    #[schemars(
        title = "Specular",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.05)
    )]
    pub specular: f32,
    /// Enable the camera-attached spot light.
    #[schemars(title = "Flashlight")]
    pub flashlight: bool,
    /// Spot light inner cone half-angle in degrees.
    #[schemars(skip)]
    pub flashlight_inner_deg: f32,
    /// Spot light outer cone half-angle in degrees.
    #[schemars(skip)]
    pub flashlight_outer_deg: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            shininess: 32.0,
            sun_direction: [-0.2, -1.0, -0.3],
            sun_color: [0.4, 0.4, 0.4],
            lamp_color: [0.8, 0.8, 0.8],
            ambient: 0.05,
            specular: 0.5,
            flashlight: true,
            flashlight_inner_deg: 12.5,
            flashlight_outer_deg: 15.0,
        }
    }
}
