//! Tests for the static block catalog and its startup integrity check.

use voxel_client::{catalog, BlockId};

#[test]
fn catalog_passes_its_integrity_check() {
    catalog::ensure_block_ids();
}

#[test]
fn air_is_id_zero() {
    assert_eq!(catalog::AIR.id, 0, "air must be the reserved id 0");
    assert_eq!(catalog::from_id(0).id, 0);
}

#[test]
fn lookup_returns_the_entry_carrying_that_id() {
    for id in 0..catalog::BLOCK_COUNT as BlockId {
        assert_eq!(
            catalog::from_id(id).id,
            id,
            "catalog position and id must agree"
        );
    }
}

#[test]
fn grass_has_distinct_top_and_side_textures() {
    let grass = catalog::from_id(catalog::GRASS.id);
    assert_eq!(grass.top_texture, "grass_top");
    assert_eq!(grass.side_texture, "grass_sides");
}

#[test]
fn blocks_compare_against_raw_ids() {
    assert!(catalog::STONE == catalog::STONE.id);
    assert!(catalog::GRASS.id == catalog::GRASS);
    assert!(catalog::AIR != catalog::STONE.id);
}

#[test]
#[should_panic(expected = "invalid block id")]
fn out_of_range_id_is_fatal() {
    catalog::from_id(catalog::BLOCK_COUNT as BlockId);
}
