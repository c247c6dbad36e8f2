// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

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

//! Morphing particle-tree visualization engine.
//!
//! Arbor drives a decorative 3D scene: thousands of instanced elements
//! spread across named layers (ornaments, lights, snow, gifts, a foliage
//! point cloud, a topper) morph between a scattered cloud and an assembled
//! tree silhouette. The crate owns layout generation, the per-frame morph
//! step, and the resulting transform buffers; drawing them is left to an
//! external render surface, which reads the buffers once per frame.
//!
//! # Key entry points
//!
//! - [`engine::ArborEngine`] - owns the scene and advances it each frame
//! - [`scene::Scene`] - generated layers and their output buffers
//! - [`options::Options`] - runtime configuration with TOML preset support
//! - [`morph`] - the scalar morph state and drift math
//!
//! # Frame loop
//!
//! Call [`engine::ArborEngine::set_target`] from input handling, then
//! [`engine::ArborEngine::step`] once per frame with the elapsed time in
//! seconds. After the step returns, every layer's instance buffer and the
//! foliage position array hold the frame's transforms, fully rewritten.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod morph;
pub mod options;
pub mod scene;
pub mod util;
pub mod wish;

pub use error::ArborError;
