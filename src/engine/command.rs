//! The demo's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, mouse
//! motion or a programmatic call, is represented as a `DemoCommand`.
//! Consumers construct commands and pass them to
//! [`DemoEngine::execute`](super::DemoEngine::execute).

/// A single discrete operation on the demo state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoCommand {
    /// Turn the camera by a cursor offset in pixels (positive y = up).
    Look {
        /// Horizontal offset.
        x_offset: f32,
        /// Vertical offset.
        y_offset: f32,
    },
    /// Scroll the zoom (positive = narrower field of view).
    Zoom {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// Switch to the next demo scene.
    CycleDemo,
    /// Ask the render loop to stop.
    Exit,
}
