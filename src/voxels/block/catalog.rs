//! The process-wide block catalog.
//!
//! A fixed, densely-indexed table of every block type the client knows.
//! The table is built at compile time; [`ensure_block_ids`] verifies at
//! startup that each entry sits at the position its id claims, since the
//! rest of the system indexes the table with raw ids from chunk storage.

use log::error;

use super::{Block, BlockId};

/// The empty block. Chunks are filled with this id by default and the
/// world reports it for any position outside the loaded area.
pub const AIR: Block = Block {
    id: 0,
    top_texture: "air",
    side_texture: "air",
};

/// Placeholder block used for the corner markers of the starting terrain.
pub const TEST: Block = Block {
    id: 1,
    top_texture: "test",
    side_texture: "test",
};

/// Plain stone.
pub const STONE: Block = Block {
    id: 2,
    top_texture: "stone",
    side_texture: "stone",
};

/// Grass, with distinct top and side textures.
pub const GRASS: Block = Block {
    id: 3,
    top_texture: "grass_top",
    side_texture: "grass_sides",
};

/// Number of block types in the catalog.
pub const BLOCK_COUNT: usize = 4;

static BLOCKS: [&Block; BLOCK_COUNT] = [&AIR, &TEST, &STONE, &GRASS];

/// Looks up a block by id.
///
/// # Panics
/// Panics on an id outside the catalog. Ids are expected to come from
/// validated chunk storage, so an out-of-range id is a logic error
/// elsewhere, not a runtime condition to recover from.
pub fn from_id(id: BlockId) -> &'static Block {
    if (id as usize) >= BLOCK_COUNT {
        error!("Invalid block id: {id}");
        panic!("invalid block id: {id}");
    }
    BLOCKS[id as usize]
}

/// Verifies that every catalog entry sits at the index its id names.
///
/// Run once at startup before any world access. A mismatch means the
/// catalog constants were edited inconsistently and every stored chunk
/// would decode to the wrong blocks.
///
/// # Panics
/// Panics on the first mismatched entry.
pub fn ensure_block_ids() {
    for (ordinal, block) in BLOCKS.iter().enumerate() {
        if block.id as usize != ordinal {
            error!(
                "Block position in the catalog does not match its id (block id: {}, index: {})",
                block.id, ordinal
            );
            panic!(
                "block catalog entry {} carries id {}",
                ordinal, block.id
            );
        }
    }
}
