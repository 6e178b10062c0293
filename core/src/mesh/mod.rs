//! CPU-side procedural geometry.
//!
//! This module provides:
//!
//! - [`Geometry`] - The contract every shape implements
//! - [`Cube`] - A box with outward or inward (skybox) winding
//! - [`GridLines`] - A wireframe grid on the XZ plane
//! - [`MeshData`] - The buffers handed to the rendering backend

mod cube;
mod data;
mod geometry;
mod grid_lines;

pub use cube::Cube;
pub use data::{MeshData, PrimitiveTopology};
pub use geometry::Geometry;
pub use grid_lines::GridLines;
