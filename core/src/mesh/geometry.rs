//! The common contract of procedural geometries.

use crate::math::Vec3;

use super::data::{MeshData, PrimitiveTopology};

/// A shape that produces CPU-side vertex and index buffers.
///
/// Implementations compute their buffers once at construction and expose
/// them read-only.
pub trait Geometry {
    /// Flat vertex positions, 3 floats per point.
    fn vertices(&self) -> &[f32];

    /// Indices into the point list.
    fn indices(&self) -> &[u32];

    /// Number of indices submitted per draw call.
    fn element_count(&self) -> u32;

    /// How the indices are assembled into primitives.
    fn topology(&self) -> PrimitiveTopology;

    /// The vertex buffer as a list of points.
    fn positions(&self) -> Vec<Vec3> {
        self.vertices()
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect()
    }

    /// Buffers and element count for draw submission.
    fn mesh_data(&self) -> MeshData<'_> {
        MeshData {
            topology: self.topology(),
            vertices: self.vertices(),
            indices: self.indices(),
            element_count: self.element_count(),
        }
    }
}
