//! # glkit core
//!
//! CPU-side data for the glkit OpenGL toolkit: procedural geometry
//! ([`mesh`]) and pixel buffers ([`texture`]). Everything here stops at the
//! buffers; uploading them is the rendering backend's job.

pub mod math;
pub mod mesh;
pub mod profiling;
pub mod texture;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
