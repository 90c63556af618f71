//! Shared utilities for the demo loop.

/// Frame delta time, smoothed FPS and frame limiting.
pub mod frame_timing;

pub use frame_timing::FrameTiming;
