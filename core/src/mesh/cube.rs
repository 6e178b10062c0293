//! Box geometry with outward or inward winding.

use crate::math::Vec3;

use super::data::PrimitiveTopology;
use super::geometry::Geometry;

/// Corners of the ±1 cube, before scaling.
const POSITIONS: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Counter-clockwise seen from outside: normals point away from the center.
#[rustfmt::skip]
const INDICES_EXTERNAL: [u32; 36] = [
    4, 5, 6,  6, 7, 4, // +z
    1, 0, 3,  3, 2, 1, // -z
    5, 1, 2,  2, 6, 5, // +x
    0, 4, 7,  7, 3, 0, // -x
    7, 6, 2,  2, 3, 7, // +y
    0, 1, 5,  5, 4, 0, // -y
];

/// Counter-clockwise seen from inside: each external triangle reversed.
#[rustfmt::skip]
const INDICES_INTERNAL: [u32; 36] = [
    6, 5, 4,  4, 7, 6, // +z
    3, 0, 1,  1, 2, 3, // -z
    2, 1, 5,  5, 6, 2, // +x
    7, 4, 0,  0, 3, 7, // -x
    2, 6, 7,  7, 3, 2, // +y
    5, 1, 0,  0, 4, 5, // -y
];

/// An axis-aligned box centered at the origin.
///
/// A skybox is viewed from inside, so its triangles are wound the other way
/// round; with back-face culling on, the outward winding would hide every
/// face the camera looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    is_skybox: bool,
    size: Vec3,
    vertices: Vec<f32>,
}

impl Cube {
    /// Create a box of the given width, height and depth.
    ///
    /// The box spans `-size / 2 ..= size / 2` on each axis.
    pub fn new(is_skybox: bool, size: Vec3) -> Self {
        let half = size / 2.0;
        let vertices = POSITIONS
            .iter()
            .flat_map(|p| [p[0] * half.x, p[1] * half.y, p[2] * half.z])
            .collect();

        log::debug!(
            "Created {} cube {}x{}x{}",
            if is_skybox { "skybox" } else { "solid" },
            size.x,
            size.y,
            size.z
        );

        Self {
            is_skybox,
            size,
            vertices,
        }
    }

    /// A unit skybox cube.
    pub fn skybox() -> Self {
        Self::new(true, Vec3::new(1.0, 1.0, 1.0))
    }

    /// Whether the faces are wound to be seen from inside.
    pub fn is_skybox(&self) -> bool {
        self.is_skybox
    }

    /// Width, height and depth.
    pub fn size(&self) -> Vec3 {
        self.size
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(false, Vec3::new(1.0, 1.0, 1.0))
    }
}

impl Geometry for Cube {
    fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    fn indices(&self) -> &[u32] {
        if self.is_skybox {
            &INDICES_INTERNAL
        } else {
            &INDICES_EXTERNAL
        }
    }

    fn element_count(&self) -> u32 {
        INDICES_EXTERNAL.len() as u32
    }

    fn topology(&self) -> PrimitiveTopology {
        PrimitiveTopology::TriangleList
    }
}
