//! Wireframe grid on the XZ plane.

use super::data::PrimitiveTopology;
use super::geometry::Geometry;

/// A square grid of `n_lines` lines parallel to X and `n_lines` lines
/// parallel to Z, spaced one unit apart, spanning `0..=n_lines - 1` on both
/// axes at `y = 0`.
///
/// Corner points are shared between the two line families, so the grid has
/// `4 * n_lines - 4` points. Vertex groups, in order:
///
/// 1. starts of the X-parallel lines, `(0, 0, i)`
/// 2. ends of the X-parallel lines, `(n - 1, 0, i)`
/// 3. starts of the inner Z-parallel lines, `(i, 0, 0)` for `i` in `1..n - 1`
/// 4. ends of the inner Z-parallel lines, `(i, 0, n - 1)`
///
/// The first and last Z-parallel lines reuse endpoints from groups 1 and 2.
///
/// Fewer than two lines cannot form a grid: `n_lines < 2` gives empty
/// buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    n_lines: u32,
    vertices: Vec<f32>,
    indices: Vec<u32>,
}

impl GridLines {
    /// Create a grid with `n_lines` lines per axis.
    pub fn new(n_lines: u32) -> Self {
        if n_lines < 2 {
            log::warn!("GridLines needs at least 2 lines per axis, got {n_lines}; grid is empty");
            return Self {
                n_lines,
                vertices: Vec::new(),
                indices: Vec::new(),
            };
        }

        let grid = Self {
            n_lines,
            vertices: Self::build_vertices(n_lines),
            indices: Self::build_indices(n_lines),
        };
        log::debug!(
            "Created {n_lines}-line grid: {} points, {} indices",
            grid.vertices.len() / 3,
            grid.indices.len()
        );
        grid
    }

    /// Number of lines per axis.
    pub fn n_lines(&self) -> u32 {
        self.n_lines
    }

    fn build_vertices(n: u32) -> Vec<f32> {
        let last = (n - 1) as f32;
        let inner = 1..n - 1;
        let mut vertices = Vec::with_capacity((4 * n as usize - 4) * 3);

        for i in 0..n {
            vertices.extend_from_slice(&[0.0, 0.0, i as f32]);
        }
        for i in 0..n {
            vertices.extend_from_slice(&[last, 0.0, i as f32]);
        }
        for i in inner.clone() {
            vertices.extend_from_slice(&[i as f32, 0.0, 0.0]);
        }
        for i in inner {
            vertices.extend_from_slice(&[i as f32, 0.0, last]);
        }

        vertices
    }

    fn build_indices(n: u32) -> Vec<u32> {
        let n_inner = n - 2;
        let mut indices = Vec::with_capacity(4 * n as usize);

        // X-parallel lines: group 1 to group 2.
        for i in 0..n {
            indices.extend_from_slice(&[i, i + n]);
        }

        // First Z-parallel line along x = 0.
        indices.extend_from_slice(&[0, n - 1]);

        // Inner Z-parallel lines: group 3 to group 4.
        for i in 0..n_inner {
            indices.extend_from_slice(&[2 * n + i, 2 * n + n_inner + i]);
        }

        // Last Z-parallel line along x = n - 1.
        indices.extend_from_slice(&[n, 2 * n - 1]);

        indices
    }
}

impl Geometry for GridLines {
    fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn element_count(&self) -> u32 {
        if self.n_lines < 2 {
            return 0;
        }
        // n X-parallel and n Z-parallel segments, two endpoints each.
        2 * (2 * self.n_lines)
    }

    fn topology(&self) -> PrimitiveTopology {
        PrimitiveTopology::LineList
    }
}
