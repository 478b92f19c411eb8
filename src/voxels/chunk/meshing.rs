//! Face-culling surface extraction for a single chunk.
//!
//! The mesher visits every non-air voxel and emits a quad for each face
//! whose neighbor is air or outside the chunk's local bounds. Neighbors in
//! adjacent chunks are never consulted: a solid voxel on the chunk edge
//! always emits its boundary-facing quad, even when the neighboring chunk
//! is solid there too.
//!
//! Quads are not merged; each visible face contributes two triangles built
//! from a fixed unit-cube template, translated to the voxel's local offset.
//! Texture coordinates start as unit-quad corners and are remapped into the
//! atlas region of the block's texture, the top texture for UP and DOWN and
//! the side texture for the lateral faces.

use cgmath::{Point3, Vector2};

use crate::rendering::{Atlas, Vertex};
use crate::voxels::block::block_face::BlockFace;
use crate::voxels::block::{catalog, Block};
use crate::{geometry::Vec3i, voxels::chunk::Chunk};

use super::{CHUNK_HEIGHT, CHUNK_SIZE};

/// Vertices per emitted face: two triangles, no index buffer.
pub const VERTICES_PER_FACE: usize = 6;

/// One unit-cube face as position (x, y, z) and texture (u, v) corners.
///
/// Triangle winding is counter-clockwise seen from outside the cube, so a
/// renderer with back-face culling shows every emitted quad.
fn face_template(face: BlockFace) -> [[f32; 5]; VERTICES_PER_FACE] {
    match face {
        BlockFace::NORTH => [
            [0.0, 0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 1.0, 1.0, 0.0],
            [0.0, 1.0, 1.0, 0.0, 1.0],
            [0.0, 1.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 1.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 1.0, 1.0],
        ],
        BlockFace::SOUTH => [
            [1.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 1.0, 1.0],
        ],
        BlockFace::EAST => [
            [1.0, 0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 0.0, 1.0, 1.0],
        ],
        BlockFace::WEST => [
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0, 0.0],
            [0.0, 1.0, 1.0, 1.0, 1.0],
        ],
        BlockFace::UP => [
            [0.0, 1.0, 1.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 0.0, 1.0],
            [1.0, 1.0, 1.0, 1.0, 0.0],
            [1.0, 1.0, 0.0, 1.0, 1.0],
        ],
        BlockFace::DOWN => [
            [0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0, 0.0],
            [1.0, 0.0, 1.0, 1.0, 1.0],
        ],
    }
}

/// Whether the face of the voxel at `local` is exposed.
///
/// A face is exposed when its neighbor is outside the chunk's local bounds
/// (no cross-chunk culling) or holds air.
fn face_visible(chunk: &Chunk, local: Vec3i, face: BlockFace) -> bool {
    let neighbor = local.offset(face);
    if !Chunk::contains_local(neighbor) {
        return true;
    }
    chunk.get_block(neighbor) == catalog::AIR.id
}

fn emit_face(
    vertices: &mut Vec<Vertex>,
    local: Vec3i,
    block: &'static Block,
    face: BlockFace,
    atlas: &Atlas,
) {
    let texture_name = match face {
        BlockFace::UP | BlockFace::DOWN => block.top_texture,
        _ => block.side_texture,
    };

    for [x, y, z, u, v] in face_template(face) {
        let position = Point3::new(
            local.x as f32 + x,
            local.y as f32 + y,
            local.z as f32 + z,
        );
        let tex_coords = atlas.apply_texture_uv(Vector2::new(u, v), texture_name);
        vertices.push(Vertex::new(position, tex_coords));
    }
}

/// Builds the full surface mesh of `chunk`.
///
/// Vertex positions are chunk-local; the draw path translates them by the
/// chunk's world offset through the model uniform.
pub fn build_mesh(chunk: &Chunk, atlas: &Atlas) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for x in 0..CHUNK_SIZE {
        for y in 0..CHUNK_HEIGHT {
            for z in 0..CHUNK_SIZE {
                let local = Vec3i::new(x, y, z);
                let id = chunk.get_block(local);
                if id == catalog::AIR.id {
                    continue;
                }

                let block = catalog::from_id(id);
                for face in BlockFace::all() {
                    if face_visible(chunk, local, face) {
                        emit_face(&mut vertices, local, block, face, atlas);
                    }
                }
            }
        }
    }

    vertices
}
