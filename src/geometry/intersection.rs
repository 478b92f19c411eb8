//! Ray representation and exact ray/voxel intersection.
//!
//! The world's picking pass walks voxels with a grid traversal and only
//! calls into [`ray_cube_intersection`] once it has found a solid voxel, so
//! the slab test here is evaluated at most once per cast.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::geometry::Vec3i;
use crate::voxels::block::block_face::BlockFace;

/// A ray with a guaranteed-normalized direction.
///
/// The direction is normalized on construction and only exposed read-only,
/// so `distance` values in a [`HitResult`] are always in world units.
pub struct Ray {
    /// Starting point of the ray in world space.
    pub origin: Point3<f32>,
    direction: Vector3<f32>,
}

impl Ray {
    /// Creates a ray from an origin and an arbitrary (non-zero) direction.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    /// The normalized direction of the ray.
    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }
}

/// The result of a successful ray/voxel intersection.
#[derive(Copy, Clone, Debug)]
pub struct HitResult {
    /// Exact intersection point on the struck face, in world space.
    pub hit_point: Point3<f32>,
    /// Distance from the ray origin to `hit_point`, in world units.
    pub distance: f32,
    /// The voxel that was struck.
    pub block_pos: Vec3i,
    /// The face through which the ray entered the voxel.
    pub block_face: BlockFace,
}

/// Intersects `ray` with the unit cube spanning `block_pos` to
/// `block_pos + 1` on every axis.
///
/// Uses the slab method: each axis contributes two plane-intersection
/// parameters, the entry time is the maximum of the per-axis minima and the
/// exit time the minimum of the per-axis maxima. Returns `None` when the
/// ray misses the cube or the entry plane lies behind the origin - a ray
/// starting inside a voxel does not hit that voxel.
///
/// The struck face is whichever plane parameter equals the entry time
/// exactly, resolved per axis in x, y, z order. Axes the ray runs parallel
/// to divide by zero and produce infinities, which the min/max folding
/// handles per IEEE semantics.
///
/// # Panics
/// Panics if no plane parameter matches the entry time; that indicates a
/// logic error in the slab computation, not a recoverable condition.
pub fn ray_cube_intersection(ray: &Ray, block_pos: Vec3i) -> Option<HitResult> {
    let origin = ray.origin;
    let direction = ray.direction();

    let t1x = (block_pos.x as f32 - origin.x) / direction.x;
    let t2x = (block_pos.x as f32 + 1.0 - origin.x) / direction.x;

    let t1y = (block_pos.y as f32 - origin.y) / direction.y;
    let t2y = (block_pos.y as f32 + 1.0 - origin.y) / direction.y;

    let t1z = (block_pos.z as f32 - origin.z) / direction.z;
    let t2z = (block_pos.z as f32 + 1.0 - origin.z) / direction.z;

    let tmin = f32::max(
        f32::min(t1x, t2x),
        f32::max(f32::min(t1y, t2y), f32::min(t1z, t2z)),
    );
    let tmax = f32::min(
        f32::max(t1x, t2x),
        f32::min(f32::max(t1y, t2y), f32::max(t1z, t2z)),
    );

    if tmin < 0.0 || tmin > tmax {
        return None;
    }

    // The entry plane identifies the struck face. t1 planes sit at the low
    // coordinate of the cube, t2 planes at the high coordinate.
    let block_face = if tmin == t1x {
        BlockFace::WEST
    } else if tmin == t2x {
        BlockFace::EAST
    } else if tmin == t1y {
        BlockFace::DOWN
    } else if tmin == t2y {
        BlockFace::UP
    } else if tmin == t1z {
        BlockFace::SOUTH
    } else if tmin == t2z {
        BlockFace::NORTH
    } else {
        log::error!("Could not determine block face in ray/cube intersection");
        panic!("could not determine block face in ray/cube intersection");
    };

    Some(HitResult {
        hit_point: origin + direction * tmin,
        distance: tmin,
        block_pos,
        block_face,
    })
}
