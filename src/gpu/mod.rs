//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, uniform bindings, growable
//! instance buffers and the depth attachment.

/// Growable per-instance vertex buffer.
pub mod instance_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment texture.
pub mod texture;
/// Uniform buffer + bind group pairs.
pub mod uniform;
