use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Window and frame pacing options.
pub struct WindowOptions {
    /// Window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Frame cap (0 = unlimited, presentation paced by vsync).
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
    /// Hide and grab the cursor for mouse look.
    pub grab_cursor: bool,
    /// Longest frame step in seconds fed to camera movement after a stall
    /// (0 = no cap, movement follows wall-clock time).
    #[schemars(range(min = 0.0, max = 1.0))]
    pub max_frame_delta: f32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "Lumen".into(),
            width: 800,
            height: 600,
            target_fps: 0,
            grab_cursor: true,
            max_frame_delta: 0.0,
        }
    }
}
