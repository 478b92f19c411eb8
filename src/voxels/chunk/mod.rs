//! # Chunk Module
//!
//! Fixed-size voxel storage and the derived surface mesh.
//!
//! A chunk is a 32x64x32 column of block ids stored in one flat, dense
//! buffer; a read or write is one bounds check and one array index.
//!
//! ## Mesh Lifecycle
//!
//! The chunk owns its triangle mesh as derived data. Any [`Chunk::set_block`]
//! marks the chunk dirty; the mesh is rebuilt lazily by the draw path via
//! [`Chunk::rebuild_mesh`], which replaces the whole vertex buffer. A
//! single-block edit re-meshes the entire chunk.

pub mod meshing;

use crate::geometry::{Vec2i, Vec3i};
use crate::rendering::{Atlas, Vertex};

use super::block::{catalog, BlockId};

/// Horizontal extent of a chunk along x and z, in blocks.
pub const CHUNK_SIZE: i32 = 32;
/// Vertical extent of a chunk, in blocks. Chunks span the full world height.
pub const CHUNK_HEIGHT: i32 = 64;
/// Total number of voxels in a chunk.
const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_HEIGHT * CHUNK_SIZE) as usize;

/// Height of the starting terrain's grass layer.
const FLOOR_HEIGHT: i32 = 10;

/// A 32x64x32 column of voxels plus its derived render mesh.
pub struct Chunk {
    chunk_coordinate: Vec2i,
    blocks: Vec<BlockId>,
    mesh: Vec<Vertex>,
    dirty: bool,
}

impl Chunk {
    /// Creates a chunk filled entirely with air.
    ///
    /// The chunk starts dirty so its (empty) mesh is built on first draw.
    pub fn empty(chunk_coordinate: Vec2i) -> Self {
        Chunk {
            chunk_coordinate,
            blocks: vec![catalog::AIR.id; CHUNK_VOLUME],
            mesh: Vec::new(),
            dirty: true,
        }
    }

    /// Creates a chunk with the flat starting terrain: stone ground topped
    /// with one layer of grass, and a marker block on each of the four
    /// horizontal corners one unit above the floor.
    pub fn floor(chunk_coordinate: Vec2i) -> Self {
        let mut chunk = Chunk::empty(chunk_coordinate);

        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                for y in 0..FLOOR_HEIGHT {
                    chunk.set_block(Vec3i::new(x, y, z), catalog::STONE.id);
                }
                chunk.set_block(Vec3i::new(x, FLOOR_HEIGHT, z), catalog::GRASS.id);
            }
        }

        let corner = CHUNK_SIZE - 1;
        chunk.set_block(Vec3i::new(0, FLOOR_HEIGHT + 1, 0), catalog::TEST.id);
        chunk.set_block(Vec3i::new(corner, FLOOR_HEIGHT + 1, 0), catalog::TEST.id);
        chunk.set_block(Vec3i::new(0, FLOOR_HEIGHT + 1, corner), catalog::TEST.id);
        chunk.set_block(Vec3i::new(corner, FLOOR_HEIGHT + 1, corner), catalog::TEST.id);

        chunk
    }

    /// The chunk's coordinate in chunk space.
    pub fn chunk_coordinate(&self) -> Vec2i {
        self.chunk_coordinate
    }

    /// Whether `local` lies inside the chunk's local bounds.
    pub fn contains_local(local: Vec3i) -> bool {
        local.x >= 0
            && local.x < CHUNK_SIZE
            && local.y >= 0
            && local.y < CHUNK_HEIGHT
            && local.z >= 0
            && local.z < CHUNK_SIZE
    }

    fn index(local: Vec3i) -> usize {
        ((local.x * CHUNK_HEIGHT + local.y) * CHUNK_SIZE + local.z) as usize
    }

    /// Reads the block id at a chunk-local position.
    ///
    /// # Panics
    /// Panics when `local` is outside the chunk. Callers translate and
    /// validate coordinates before reaching the chunk, so an out-of-range
    /// position is a programming error.
    pub fn get_block(&self, local: Vec3i) -> BlockId {
        if !Self::contains_local(local) {
            panic!("block position {local:?} out of range in chunk");
        }
        self.blocks[Self::index(local)]
    }

    /// Writes the block id at a chunk-local position and marks the chunk
    /// dirty.
    ///
    /// # Panics
    /// Panics when `local` is outside the chunk, as with [`Chunk::get_block`].
    pub fn set_block(&mut self, local: Vec3i, id: BlockId) {
        if !Self::contains_local(local) {
            panic!("block position {local:?} out of range in chunk");
        }
        self.blocks[Self::index(local)] = id;
        self.dirty = true;
    }

    /// Whether the mesh no longer reflects the voxel contents.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The current surface mesh. Empty or stale while the chunk is dirty.
    pub fn mesh(&self) -> &[Vertex] {
        &self.mesh
    }

    /// Rebuilds the surface mesh from the voxel contents and clears the
    /// dirty flag. The previous vertex buffer is replaced in full.
    pub fn rebuild_mesh(&mut self, atlas: &Atlas) {
        self.mesh = meshing::build_mesh(self, atlas);
        self.dirty = false;
    }
}
