use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::DemoKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Demo", inline)]
#[serde(default)]
/// Scene selection and animation.
pub struct DemoOptions {
    /// Scene shown at startup.
    pub kind: DemoKind,
    /// Extra cube rotation in degrees per second (0 = static).
    #[schemars(
        title = "Cube Spin",
        range(min = 0.0, max = 180.0),
        extend("step" = 1.0)
    )]
    pub cube_spin: f32,
    /// Background clear color (linear RGB).
    #[schemars(skip)]
    pub clear_color: [f32; 3],
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            kind: DemoKind::Cubes,
            cube_spin: 20.0,
            clear_color: [0.2, 0.3, 0.3],
        }
    }
}
