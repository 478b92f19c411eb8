#![warn(missing_docs)]

//! # Voxel Client
//!
//! The world-state core of a block-building client: chunked voxel storage,
//! face-culling surface extraction, and ray picking for block placement
//! and removal.
//!
//! ## Key Modules
//!
//! * `geometry` - integer coordinates and exact ray/voxel intersection
//! * `voxels` - the block catalog, chunks, and the world
//! * `rendering` - the vertex format, the atlas UV table, and the narrow
//!   contracts a real renderer plugs into
//!
//! ## Architecture
//!
//! The [`World`] owns all chunks and is the only entry point for reads,
//! writes and picking in world coordinates. Writes mark the owning chunk
//! dirty; the draw path rebuilds dirty meshes just before submitting them.
//! Everything runs synchronously on the caller's thread - there is no
//! background meshing and no locking.
//!
//! The graphics stack itself (window, GPU pipeline, texture upload) stays
//! outside this crate, behind [`UniformSink`] and [`DrawSubmission`].

use cgmath::{Matrix4, Point3, Vector3};
use log::{info, warn};

pub mod geometry;
pub mod rendering;
pub mod voxels;

pub use geometry::intersection::{ray_cube_intersection, HitResult, Ray};
pub use geometry::{Vec2i, Vec3i};
pub use rendering::{Atlas, DrawSubmission, TextureUv, UniformSink, Vertex};
pub use voxels::block::block_face::BlockFace;
pub use voxels::block::{catalog, Block, BlockId};
pub use voxels::chunk::{meshing, Chunk, CHUNK_HEIGHT, CHUNK_SIZE};
pub use voxels::world::{block_pos_to_chunk_pos, World};

/// Texel dimensions of the default texture sheet.
const ATLAS_SHEET_SIZE: i32 = 32;

/// Records what a frame would have sent to the graphics stack.
#[derive(Default)]
struct HeadlessFrame {
    uniform_writes: usize,
    submissions: usize,
    triangles: u32,
}

impl UniformSink for HeadlessFrame {
    fn activate(&mut self) {}

    fn set_matrix4_uniform(&mut self, _name: &str, _value: Matrix4<f32>) {
        self.uniform_writes += 1;
    }

    fn set_int_uniform(&mut self, _name: &str, _value: i32) {
        self.uniform_writes += 1;
    }
}

impl DrawSubmission for HeadlessFrame {
    fn submit(&mut self, _vertex_data: &[u8], triangle_count: u32) {
        self.submissions += 1;
        self.triangles += triangle_count;
    }
}

/// Runs the client core headlessly: bootstraps the world, meshes it, and
/// exercises one picking-driven edit cycle.
///
/// This is the startup sequence a windowed client would follow before
/// entering its event loop; with no renderer attached, the frame output is
/// logged instead of drawn.
pub fn run() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();
    info!("Logger initialized");

    // Catalog integrity is checked before any world access.
    catalog::ensure_block_ids();

    let atlas = Atlas::with_default_layout(ATLAS_SHEET_SIZE, ATLAS_SHEET_SIZE);
    let mut world = World::new();

    let mut shader = HeadlessFrame::default();
    let mut frame = HeadlessFrame::default();
    world.draw(&atlas, &mut shader, &mut frame);
    info!(
        "Initial meshes built: {} chunks, {} triangles, {} uniform writes",
        frame.submissions, frame.triangles, shader.uniform_writes
    );

    // The picking probe a frame would run: straight down from the spawn
    // point onto the starting floor.
    let down = Ray::new(Point3::new(0.5, 13.0, 0.5), Vector3::new(0.0, -1.0, 0.0));
    if let Some(hit) = world.ray_cast(&down) {
        info!(
            "Picked block {:?} on face {:?} at distance {}",
            hit.block_pos, hit.block_face, hit.distance
        );

        // Place a block against the struck face, then break it again.
        let placed = hit.block_pos.offset(hit.block_face);
        match world.set_block(placed, catalog::TEST.id) {
            Ok(()) => info!("Placed block at {placed:?}"),
            Err(e) => warn!("{e}"),
        }
        if let Err(e) = world.set_block(placed, catalog::AIR.id) {
            warn!("{e}");
        }
    }

    // Out past the loaded chunks the edit is refused, not crashed on.
    if let Err(e) = world.set_block(Vec3i::new(1000, 10, 0), catalog::STONE.id) {
        warn!("{e}");
    }
}
