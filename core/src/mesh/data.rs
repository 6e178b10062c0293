//! Draw-submission data handed to the rendering backend.
//!
//! This module provides:
//! - [`PrimitiveTopology`] - How indices are assembled into primitives
//! - [`MeshData`] - Borrowed vertex/index buffers plus element count

/// Primitive topology describing how indices are assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Every two indices form a line (`GL_LINES`).
    LineList,
    /// Every three indices form a triangle (`GL_TRIANGLES`).
    #[default]
    TriangleList,
}

impl PrimitiveTopology {
    /// Get the number of indices per primitive.
    pub fn vertices_per_primitive(&self) -> u32 {
        match self {
            Self::LineList => 2,
            Self::TriangleList => 3,
        }
    }

    /// OpenGL primitive mode enum for draw calls.
    pub fn gl_mode(&self) -> u32 {
        match self {
            Self::LineList => 0x0001,
            Self::TriangleList => 0x0004,
        }
    }
}

/// Borrowed geometry buffers in the shape a draw call expects.
///
/// The backend uploads `vertices` and `indices` and draws `element_count`
/// indices with `topology`. Nothing here is retained by the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshData<'a> {
    /// Primitive topology.
    pub topology: PrimitiveTopology,
    /// Flat positions, 3 floats per point.
    pub vertices: &'a [f32],
    /// Indices into the point list.
    pub indices: &'a [u32],
    /// Number of indices to draw.
    pub element_count: u32,
}

impl MeshData<'_> {
    /// Number of points in the vertex buffer.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex buffer as raw bytes (12 bytes per point).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices)
    }

    /// Index buffer as raw bytes (4 bytes per index).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.indices)
    }

    /// Number of whole primitives described by the element count.
    pub fn primitive_count(&self) -> u32 {
        self.element_count / self.topology.vertices_per_primitive()
    }
}
