use crate::bounding_volume::BoundingSphere;
use crate::entity::Block;
use crate::math::{Point, Real, Rotation, Vector};
use crate::query::intersection_test::obb_sphere_intersect;
use crate::query::point::{closest_point_on_ellipsoid, signed_distance_and_closest_point};
use crate::query::surface_crossing::{points_surface_crossing, EdgeSolverOptions};
use crate::shape::{Ellipsoid, OrientedBox};

/// Options of the block surface crossing queries.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockQueryOptions {
    /// Blocks whose center is farther than this from the shield surface, on either side, are
    /// ignored.
    pub max_surface_distance: Real,
    /// Options of the edge solver run on blocks that pass the prefilters.
    pub edge_solver: EdgeSolverOptions,
}

impl Default for BlockQueryOptions {
    fn default() -> Self {
        BlockQueryOptions {
            max_surface_distance: 10.0,
            edge_solver: EdgeSolverOptions::default(),
        }
    }
}

/// A point where `block` touches the shield, with the default options.
///
/// See [`block_surface_crossing_with_options`].
#[inline]
pub fn block_surface_crossing<B: Block + ?Sized>(
    block: &B,
    shield_obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    points: &mut [Point<Real>; 9],
) -> Option<Point<Real>> {
    block_surface_crossing_with_options(
        block,
        shield_obb,
        ellipsoid,
        points,
        &BlockQueryOptions::default(),
    )
}

/// A point where `block` touches the shield.
///
/// The block is first approximated by the sphere centered at its center with its largest
/// half-extent as radius:
/// - if that sphere misses `shield_obb`, returns `None`;
/// - if the block center is farther outside of the shield surface than the sphere radius, or
///   farther than `options.max_surface_distance` from the surface on either side, returns
///   `None`;
/// - if the block is the grid origin block (its first and last cells cancel out), returns the
///   projection of its center on the shield surface.
///
/// Otherwise the block is seen as a box oriented like `shield_obb` and handed to
/// [`points_surface_crossing`], with its corners and center written to `points`.
pub fn block_surface_crossing_with_options<B: Block + ?Sized>(
    block: &B,
    shield_obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    points: &mut [Point<Real>; 9],
    options: &BlockQueryOptions,
) -> Option<Point<Real>> {
    let half_extents = block.local_half_extents();
    let center = block.world_center();
    let radius = half_extents.amax();

    if !obb_sphere_intersect(shield_obb, &BoundingSphere::new(center, radius)) {
        return None;
    }

    let (dist, closest) = signed_distance_and_closest_point(ellipsoid, &center);

    if dist > radius || dist.abs() > options.max_surface_distance {
        return None;
    }

    let (min_cell, max_cell) = block.cell_bounds();

    if min_cell + max_cell == Vector::zeros() {
        return Some(closest);
    }

    let block_box = OrientedBox::new(center, half_extents, shield_obb.rotation);
    block_box.corners_and_center(points);
    points_surface_crossing(points, radius, ellipsoid, &options.edge_solver)
}

/// Cheap block/shield overlap test performed in the local space of the shield.
///
/// The block is mapped to the local space of the shield as a box centered at the image of its
/// center, with its half-extents divided by `shield_half_extents` and oriented by
/// `local_rotation`. If that box touches the unit sphere, the projection of the block center
/// on the shield surface is returned.
///
/// Returns `None` if one of the `shield_half_extents` is not strictly positive.
pub fn block_local_crossing<B: Block + ?Sized>(
    block: &B,
    ellipsoid: &Ellipsoid,
    shield_half_extents: &Vector<Real>,
    local_rotation: &Rotation<Real>,
) -> Option<Point<Real>> {
    if shield_half_extents.iter().any(|h| *h <= 0.0) {
        return None;
    }

    let center = block.world_center();
    let local_box = OrientedBox::new(
        ellipsoid.to_local(&center),
        block.local_half_extents().component_div(shield_half_extents),
        *local_rotation,
    );

    if obb_sphere_intersect(&local_box, &BoundingSphere::new(Point::origin(), 1.0)) {
        Some(closest_point_on_ellipsoid(ellipsoid, &center))
    } else {
        None
    }
}
