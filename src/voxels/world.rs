//! # World Module
//!
//! The sparse collection of chunks and everything that works in world
//! coordinates: chunk addressing, the in-world policy, block access,
//! picking, and draw orchestration.
//!
//! ## Coordinate Policy
//!
//! World x/z map to a chunk with floor division (truncating division would
//! be off by one for negative coordinates) and to a chunk-local position
//! with sign-corrected modulo. A position is in the world iff its chunk is
//! loaded and its y lies inside the chunk height.
//!
//! ## Error Policy
//!
//! Reads outside the world answer air. Writes outside the world are a
//! normal runtime condition (the player aiming past the loaded area) and
//! surface as an error to the caller; they never panic and never silently
//! drop the write.

use std::collections::HashMap;

use anyhow::{bail, Result};
use cgmath::{Matrix4, Vector3};
use log::info;

use crate::geometry::intersection::{ray_cube_intersection, HitResult, Ray};
use crate::geometry::{Vec2i, Vec3i};
use crate::rendering::{Atlas, DrawSubmission, UniformSink};
use crate::voxels::block::{catalog, BlockId};
use crate::voxels::chunk::{Chunk, CHUNK_HEIGHT, CHUNK_SIZE};

/// Picking never walks further than this many voxel steps; a ray that
/// finds nothing within the limit reports no hit.
const RAY_CAST_STEP_LIMIT: usize = 100;

/// Chunks loaded at startup: a square grid spanning this radius around the
/// origin chunk.
const STARTING_GRID_RADIUS: i32 = 1;

/// Maps a world block position to the coordinate of its owning chunk.
///
/// Floor division on the horizontal axes: x = -1 belongs to chunk -1, not
/// chunk 0, and x = -33 to chunk -2.
pub fn block_pos_to_chunk_pos(block_pos: Vec3i) -> Vec2i {
    let chunk_x = if block_pos.x >= 0 {
        block_pos.x / CHUNK_SIZE
    } else {
        (block_pos.x + 1) / CHUNK_SIZE - 1
    };
    let chunk_z = if block_pos.z >= 0 {
        block_pos.z / CHUNK_SIZE
    } else {
        (block_pos.z + 1) / CHUNK_SIZE - 1
    };
    Vec2i::new(chunk_x, chunk_z)
}

/// Translates a world position into the local space of its owning chunk.
/// The vertical component passes through unchanged.
fn to_local(block_pos: Vec3i) -> Vec3i {
    let x = ((block_pos.x % CHUNK_SIZE) + CHUNK_SIZE) % CHUNK_SIZE;
    let z = ((block_pos.z % CHUNK_SIZE) + CHUNK_SIZE) % CHUNK_SIZE;
    Vec3i::new(x, block_pos.y, z)
}

/// The loaded world: a map from chunk coordinate to chunk.
///
/// The world exclusively owns its chunks. Every key maps to a chunk whose
/// own coordinate equals that key; chunks never reference the world or
/// each other.
pub struct World {
    chunks: HashMap<Vec2i, Chunk>,
}

impl World {
    /// Creates the starting world: a 3x3 grid of flat-floor chunks
    /// centered on the origin.
    pub fn new() -> Self {
        let mut chunks = HashMap::new();
        for x in -STARTING_GRID_RADIUS..=STARTING_GRID_RADIUS {
            for z in -STARTING_GRID_RADIUS..=STARTING_GRID_RADIUS {
                let chunk_coordinate = Vec2i::new(x, z);
                chunks.insert(chunk_coordinate, Chunk::floor(chunk_coordinate));
            }
        }
        info!("World created with {} chunks", chunks.len());
        World { chunks }
    }

    /// Number of loaded chunks.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The chunk at `chunk_coordinate`, if loaded.
    pub fn chunk(&self, chunk_coordinate: Vec2i) -> Option<&Chunk> {
        self.chunks.get(&chunk_coordinate)
    }

    /// Whether `block_pos` lies inside the loaded world: its chunk is
    /// present and its height is within the chunk's vertical extent.
    pub fn is_in_world(&self, block_pos: Vec3i) -> bool {
        self.chunks.contains_key(&block_pos_to_chunk_pos(block_pos))
            && block_pos.y >= 0
            && block_pos.y < CHUNK_HEIGHT
    }

    /// Reads the block at a world position. Positions outside the loaded
    /// world read as air.
    pub fn get_block(&self, block_pos: Vec3i) -> BlockId {
        if !self.is_in_world(block_pos) {
            return catalog::AIR.id;
        }

        let chunk = &self.chunks[&block_pos_to_chunk_pos(block_pos)];
        chunk.get_block(to_local(block_pos))
    }

    /// Writes the block at a world position, marking the owning chunk
    /// dirty.
    ///
    /// # Errors
    /// Fails when `block_pos` is outside the loaded world. This is the
    /// caller's signal to drop or defer the edit, not a crash.
    pub fn set_block(&mut self, block_pos: Vec3i, id: BlockId) -> Result<()> {
        if !self.is_in_world(block_pos) {
            bail!("trying to set block outside of world at {block_pos:?}");
        }

        let chunk = self
            .chunks
            .get_mut(&block_pos_to_chunk_pos(block_pos))
            .expect("in-world position must map to a loaded chunk");
        chunk.set_block(to_local(block_pos), id);
        Ok(())
    }

    /// Finds the first solid voxel along `ray`.
    ///
    /// Walks the voxel grid one cell boundary at a time: each iteration
    /// computes, per axis, the ray parameter of the next grid plane in the
    /// stepping direction and advances exactly the axis whose plane is
    /// nearest (x wins ties against y and z, then y against z). The first
    /// non-air voxel is resolved to an exact hit with
    /// [`ray_cube_intersection`].
    ///
    /// The walk gives up after 100 steps and returns `None`; the voxel the
    /// ray starts inside is never reported.
    pub fn ray_cast(&self, ray: &Ray) -> Option<HitResult> {
        let origin = ray.origin;
        let direction = ray.direction();

        let x_sign: i32 = if direction.x.is_sign_negative() { -1 } else { 1 };
        let y_sign: i32 = if direction.y.is_sign_negative() { -1 } else { 1 };
        let z_sign: i32 = if direction.z.is_sign_negative() { -1 } else { 1 };

        let mut current_x = origin.x.floor() as i32;
        let mut current_y = origin.y.floor() as i32;
        let mut current_z = origin.z.floor() as i32;

        for _ in 0..RAY_CAST_STEP_LIMIT {
            // The next boundary plane on each axis: the far side of the
            // current cell when stepping positive, the near side otherwise.
            let x_plane = (if x_sign == 1 { current_x + 1 } else { current_x }) as f32;
            let y_plane = (if y_sign == 1 { current_y + 1 } else { current_y }) as f32;
            let z_plane = (if z_sign == 1 { current_z + 1 } else { current_z }) as f32;

            let tx = (x_plane - origin.x) / direction.x;
            let ty = (y_plane - origin.y) / direction.y;
            let tz = (z_plane - origin.z) / direction.z;

            if tx < ty && tx < tz {
                current_x += x_sign;
            } else if ty < tz {
                current_y += y_sign;
            } else {
                current_z += z_sign;
            }

            let block_pos = Vec3i::new(current_x, current_y, current_z);
            if self.get_block(block_pos) != catalog::AIR.id {
                return ray_cube_intersection(ray, block_pos);
            }
        }

        None
    }

    /// Draws every chunk.
    ///
    /// Chunks whose mesh is stale are rebuilt here, immediately before
    /// their geometry is needed. For each non-empty chunk the draw path
    /// writes the chunk's world offset as the model uniform and submits the
    /// chunk's vertex buffer.
    pub fn draw(
        &mut self,
        atlas: &Atlas,
        shader: &mut impl UniformSink,
        target: &mut impl DrawSubmission,
    ) {
        shader.activate();
        // The chunk shader samples the shared texture sheet from unit 0.
        shader.set_int_uniform("atlas", 0);

        for chunk in self.chunks.values_mut() {
            if chunk.is_dirty() {
                chunk.rebuild_mesh(atlas);
            }

            let mesh = chunk.mesh();
            if mesh.is_empty() {
                continue;
            }

            let chunk_coordinate = chunk.chunk_coordinate();
            let offset = Vector3::new(
                (chunk_coordinate.x * CHUNK_SIZE) as f32,
                0.0,
                (chunk_coordinate.y * CHUNK_SIZE) as f32,
            );
            shader.set_matrix4_uniform("model", Matrix4::from_translation(offset));
            target.submit(bytemuck::cast_slice(mesh), (mesh.len() / 3) as u32);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        World::new()
    }
}
