use crate::math::{distance_squared, Point, Real};
use crate::utils;

/// Computes the bounding sphere of a set of point, given its center.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let dist_sq = distance_squared(pt, &center);

        if dist_sq > sqradius {
            sqradius = dist_sq
        }
    }

    (center, sqradius.sqrt())
}

/// Computes a bounding sphere of the specified set of point.
///
/// The center is the centroid of the points, so the sphere is not the smallest one in general.
#[inline]
pub fn point_cloud_bounding_sphere(pts: &[Point<Real>]) -> (Point<Real>, Real) {
    point_cloud_bounding_sphere_with_center(pts, utils::center(pts))
}
