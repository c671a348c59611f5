//! Vertex and index buffers handed to an external renderer.

use crate::float::Float;
use crate::vec::{Vec2, Vec3};
use alloc::vec::Vec as AllocVec;

/// Linear RGBA color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }
}

/// One cloth vertex: position, color, normal and texture coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClothVertex<F: Float> {
    pub position: Vec3<F>,
    pub color: Rgba,
    pub uv: Vec2<F>,
    pub normal: Vec3<F>,
}

/// Triangle list over a cloth grid.
///
/// `indices` holds three entries per triangle, two triangles per grid cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClothMesh<F: Float> {
    pub vertices: AllocVec<ClothVertex<F>>,
    pub indices: AllocVec<u32>,
}

impl<F: Float> ClothMesh<F> {
    pub fn new() -> Self {
        ClothMesh { vertices: AllocVec::new(), indices: AllocVec::new() }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertices of triangle `t`.
    pub fn triangle(&self, t: usize) -> [&ClothVertex<F>; 3] {
        let i = &self.indices[t * 3..t * 3 + 3];
        [
            &self.vertices[i[0] as usize],
            &self.vertices[i[1] as usize],
            &self.vertices[i[2] as usize],
        ]
    }
}
