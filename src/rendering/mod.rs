//! # Rendering Module
//!
//! The seams between the voxel core and the graphics stack.
//!
//! The core never talks to a GPU. It produces flat vertex buffers
//! ([`Vertex`]), remaps texture coordinates through the [`Atlas`] UV table,
//! and hands the results to two narrow collaborator contracts:
//! [`UniformSink`] for shader state and [`DrawSubmission`] for vertex-buffer
//! upload and the draw call. A real renderer implements both against its
//! graphics API; tests implement them with plain recording structs.

pub mod atlas;
pub mod vertex;

pub use atlas::{Atlas, TextureUv};
pub use vertex::Vertex;

use cgmath::Matrix4;

/// Write-only handle to a shader program's uniforms.
///
/// The draw path activates the program once per frame and writes the
/// per-chunk model translation before each submission.
pub trait UniformSink {
    /// Makes this program the active one for subsequent uniform writes and
    /// draw submissions.
    fn activate(&mut self);

    /// Writes a 4x4 matrix uniform.
    fn set_matrix4_uniform(&mut self, name: &str, value: Matrix4<f32>);

    /// Writes a scalar integer uniform (texture units, flags).
    fn set_int_uniform(&mut self, name: &str, value: i32);
}

/// Receives a finished chunk mesh for upload and drawing.
pub trait DrawSubmission {
    /// Submits one chunk's vertex buffer.
    ///
    /// `vertex_data` is tightly packed [`Vertex`] records - stride
    /// position(3 x f32) + texcoord(2 x f32) - covering `triangle_count`
    /// triangles.
    fn submit(&mut self, vertex_data: &[u8], triangle_count: u32);
}
