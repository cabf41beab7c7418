//! Interfaces to the host world entities the shield queries read from.
//!
//! The queries never own or mutate world state. Rigid bodies and blocks are consumed through
//! these traits, voxel storage through [`crate::query::voxel::VoxelStorage`].

use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{Isometry, Point, Real, Vector};

/// A rigid body of the host world: a ship, a station, a character, a floating object.
pub trait RigidBody {
    /// The world-space axis-aligned bounds of this body.
    fn world_aabb(&self) -> Aabb;

    /// The bounds of this body expressed in its own local frame.
    fn local_aabb(&self) -> Aabb;

    /// The position and orientation of this body.
    fn world_transform(&self) -> Isometry<Real>;

    /// The linear velocity of this body, in world units per second.
    ///
    /// `None` if this body is not simulated by the physics engine.
    fn linear_velocity(&self) -> Option<Vector<Real>>;

    /// The bounding sphere of this body.
    ///
    /// Defaults to the sphere passing through the corners of [`RigidBody::world_aabb`].
    fn world_volume(&self) -> BoundingSphere {
        self.world_aabb().bounding_sphere()
    }
}

/// A single block of a grid.
pub trait Block {
    /// Half-extents of the block, in its local frame.
    fn local_half_extents(&self) -> Vector<Real>;

    /// World-space center of the block.
    fn world_center(&self) -> Point<Real>;

    /// The first and last grid cells occupied by this block.
    fn cell_bounds(&self) -> (Vector<i32>, Vector<i32>);
}
