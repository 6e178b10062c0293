//! Math type aliases.
//!
//! Geometry positions and extents use nalgebra's f32 vectors.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;
