//! Tests for world-coordinate addressing, the in-world policy, block
//! access across chunks, and draw orchestration.

use cgmath::Matrix4;
use voxel_client::{
    block_pos_to_chunk_pos, catalog, Atlas, DrawSubmission, UniformSink, Vec2i, Vec3i, World,
    CHUNK_HEIGHT,
};

fn test_atlas() -> Atlas {
    Atlas::with_default_layout(32, 32)
}

/// Uniform sink that records model translations by their x/z offset.
#[derive(Default)]
struct RecordingShader {
    activations: usize,
    model_offsets: Vec<(f32, f32)>,
}

impl UniformSink for RecordingShader {
    fn activate(&mut self) {
        self.activations += 1;
    }

    fn set_matrix4_uniform(&mut self, name: &str, value: Matrix4<f32>) {
        assert_eq!(name, "model");
        self.model_offsets.push((value.w.x, value.w.z));
    }

    fn set_int_uniform(&mut self, _name: &str, _value: i32) {}
}

#[derive(Default)]
struct RecordingTarget {
    submissions: Vec<(usize, u32)>,
}

impl DrawSubmission for RecordingTarget {
    fn submit(&mut self, vertex_data: &[u8], triangle_count: u32) {
        self.submissions.push((vertex_data.len(), triangle_count));
    }
}

#[test]
fn chunk_addressing_uses_floor_division() {
    let cases = [
        (0, 0),
        (1, 0),
        (31, 0),
        (32, 1),
        (63, 1),
        (64, 2),
        (-1, -1),
        (-32, -1),
        (-33, -2),
        (-64, -2),
        (-65, -3),
    ];
    for (world_x, chunk_x) in cases {
        assert_eq!(
            block_pos_to_chunk_pos(Vec3i::new(world_x, 0, 0)),
            Vec2i::new(chunk_x, 0),
            "world x = {world_x}"
        );
        // The z axis follows the same rule.
        assert_eq!(
            block_pos_to_chunk_pos(Vec3i::new(0, 0, world_x)),
            Vec2i::new(0, chunk_x),
            "world z = {world_x}"
        );
    }
}

#[test]
fn in_world_requires_a_loaded_chunk_and_a_valid_height() {
    let world = World::new();

    assert!(world.is_in_world(Vec3i::new(0, 0, 0)));
    assert!(world.is_in_world(Vec3i::new(-32, CHUNK_HEIGHT - 1, 47)));

    // Height out of range, even over a loaded chunk.
    assert!(!world.is_in_world(Vec3i::new(0, -1, 0)));
    assert!(!world.is_in_world(Vec3i::new(0, CHUNK_HEIGHT, 0)));

    // Columns past the starting 3x3 grid.
    assert!(!world.is_in_world(Vec3i::new(96, 10, 0)));
    assert!(!world.is_in_world(Vec3i::new(0, 10, -65)));
}

#[test]
fn reads_outside_the_world_answer_air() {
    let world = World::new();
    assert_eq!(world.get_block(Vec3i::new(500, 10, 500)), catalog::AIR.id);
    assert_eq!(world.get_block(Vec3i::new(0, -1, 0)), catalog::AIR.id);
    assert_eq!(world.get_block(Vec3i::new(0, CHUNK_HEIGHT, 0)), catalog::AIR.id);
}

#[test]
fn starting_terrain_is_visible_through_world_reads() {
    let world = World::new();

    let grass = world.get_block(Vec3i::new(0, 10, 0));
    let stone = world.get_block(Vec3i::new(0, 9, 0));
    assert_eq!(grass, catalog::GRASS.id);
    assert_eq!(stone, catalog::STONE.id);

    // The floor continues across chunk borders, negative side included.
    assert_eq!(world.get_block(Vec3i::new(-1, 10, -1)), catalog::GRASS.id);
    assert_eq!(world.get_block(Vec3i::new(-20, 10, 40)), catalog::GRASS.id);

    // Chunk-corner markers meet around the origin: the (0, 0) chunk's
    // corner sits at world (0, 11, 0), its negative neighbor's at (-1, 11, -1).
    assert_eq!(world.get_block(Vec3i::new(0, 11, 0)), catalog::TEST.id);
    assert_eq!(world.get_block(Vec3i::new(-1, 11, -1)), catalog::TEST.id);
}

#[test]
fn writes_round_trip_across_negative_chunks() {
    let mut world = World::new();

    let positions = [
        Vec3i::new(0, 30, 0),
        Vec3i::new(-1, 30, -1),
        Vec3i::new(-32, 30, 17),
        Vec3i::new(47, 30, -20),
    ];
    for pos in positions {
        world.set_block(pos, catalog::TEST.id).unwrap();
        assert_eq!(world.get_block(pos), catalog::TEST.id, "at {pos:?}");
    }
}

#[test]
fn writes_outside_the_world_are_refused() {
    let mut world = World::new();

    assert!(world.set_block(Vec3i::new(1000, 10, 0), catalog::STONE.id).is_err());
    assert!(world.set_block(Vec3i::new(0, CHUNK_HEIGHT, 0), catalog::STONE.id).is_err());
    assert!(world.set_block(Vec3i::new(0, -1, 0), catalog::STONE.id).is_err());

    // The refused write must not have landed anywhere.
    assert_eq!(world.get_block(Vec3i::new(1000, 10, 0)), catalog::AIR.id);
}

#[test]
fn a_write_dirties_only_the_owning_chunk() {
    let mut world = World::new();
    let atlas = test_atlas();

    // Settle all meshes first.
    world.draw(&atlas, &mut RecordingShader::default(), &mut RecordingTarget::default());
    assert!(!world.chunk(Vec2i::new(0, 0)).unwrap().is_dirty());

    world.set_block(Vec3i::new(0, 30, 0), catalog::STONE.id).unwrap();

    assert!(world.chunk(Vec2i::new(0, 0)).unwrap().is_dirty());
    assert!(!world.chunk(Vec2i::new(1, 1)).unwrap().is_dirty());
    assert!(!world.chunk(Vec2i::new(-1, 0)).unwrap().is_dirty());
}

#[test]
fn draw_submits_every_chunk_with_its_world_offset() {
    let mut world = World::new();
    let atlas = test_atlas();
    let mut shader = RecordingShader::default();
    let mut target = RecordingTarget::default();

    world.draw(&atlas, &mut shader, &mut target);

    assert_eq!(shader.activations, 1);
    assert_eq!(target.submissions.len(), 9, "all nine starting chunks have geometry");
    assert_eq!(shader.model_offsets.len(), 9);

    // One model translation per chunk, at multiples of the chunk size.
    let mut offsets = shader.model_offsets.clone();
    offsets.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mut expected = Vec::new();
    for x in [-32.0f32, 0.0, 32.0] {
        for z in [-32.0f32, 0.0, 32.0] {
            expected.push((x, z));
        }
    }
    assert_eq!(offsets, expected);

    // Submitted byte lengths match the declared triangle counts at the
    // position(3) + texcoord(2) stride.
    for (bytes, triangles) in target.submissions {
        assert!(triangles > 0);
        assert_eq!(bytes as u32, triangles * 3 * 5 * 4);
    }
}
