//! # Voxels Module
//!
//! Block-level world state: the static block catalog, chunked voxel
//! storage, surface extraction, and the world that ties them together.
//!
//! ## Data Flow
//!
//! 1. [`world::World`] receives block reads and writes in world coordinates
//! 2. It translates them to a chunk and a chunk-local position
//! 3. A write marks the owning chunk dirty
//! 4. The next draw rebuilds the dirty chunk's mesh from the catalog and
//!    the texture atlas

pub mod block;
pub mod chunk;
pub mod world;

pub use block::BlockId;
