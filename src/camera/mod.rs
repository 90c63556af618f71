//! Free-look camera for the demo scenes.
//!
//! The camera turns discrete keyboard, mouse and scroll deltas into a pose
//! and exposes the view/projection matrices the renderer uploads each frame.

/// Camera pose, input integration and GPU uniform types.
pub mod core;

pub use self::core::{Camera, CameraUniform, Movement};
