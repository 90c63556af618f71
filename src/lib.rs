// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-look camera demos rendered with wgpu.
//!
//! A window shows one of a few fixed scenes (rotating cubes, or the same
//! cubes under Phong lighting with directional, point and spot lights) and
//! flies a single yaw/pitch camera through it with WASD, the mouse and the
//! scroll wheel.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the free-look camera model
//! - [`engine::DemoEngine`] - per-window demo state driven by input events
//! - [`options::Options`] - TOML-backed runtime configuration
//! - `viewer::Viewer` - winit window and event loop (feature `viewer`)
//!
//! # Architecture
//!
//! Window events are translated into platform-agnostic
//! [`input::InputEvent`]s, which the [`input::InputProcessor`] turns into
//! [`engine::DemoCommand`]s. Once per frame the engine moves the camera for
//! held keys, advances the scene clock and emits an [`engine::Frame`]
//! snapshot that [`renderer::SceneRenderer`] uploads and draws. Everything
//! above the renderer is GPU-free and unit tested headless.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{Camera, Movement};
pub use engine::{DemoCommand, DemoEngine};
pub use error::LumenError;
pub use options::Options;
