//! Vertex layout shared with the draw collaborator.

use cgmath::{Point3, Vector2};

/// A mesh vertex: chunk-local position plus atlas texture coordinates.
///
/// # Memory Layout
/// `#[repr(C)]` with five consecutive `f32`s (20 bytes), matching the
/// stride the draw collaborator expects: position(3) + texcoord(2). The
/// `bytemuck` derives let a whole mesh be handed over as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    position: [f32; 3],
    tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a vertex from a position and already-remapped texture
    /// coordinates.
    pub fn new(position: Point3<f32>, tex_coords: Vector2<f32>) -> Self {
        Vertex {
            position: [position.x, position.y, position.z],
            tex_coords: [tex_coords.x, tex_coords.y],
        }
    }

    /// The vertex position.
    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.position[0], self.position[1], self.position[2])
    }

    /// The vertex texture coordinates.
    pub fn tex_coords(&self) -> Vector2<f32> {
        Vector2::new(self.tex_coords[0], self.tex_coords[1])
    }
}
