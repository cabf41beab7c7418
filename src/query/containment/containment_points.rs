use crate::math::{Point, Real};
use crate::shape::Ellipsoid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Is `pt` inside of the shield or on its surface?
#[inline]
pub fn point_in_shield(pt: &Point<Real>, ellipsoid: &Ellipsoid) -> bool {
    ellipsoid.contains_point(pt)
}

/// Number of `points` inside of the shield.
pub fn points_in_shield_count(points: &[Point<Real>], ellipsoid: &Ellipsoid) -> usize {
    points
        .iter()
        .filter(|pt| ellipsoid.contains_point(pt))
        .count()
}

/// Number of `points` inside of the shield, counted on the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn points_in_shield_par(points: &[Point<Real>], ellipsoid: &Ellipsoid) -> usize {
    points
        .par_iter()
        .filter(|pt| ellipsoid.contains_point(pt))
        .count()
}

/// Collects the sample points of two overlapping shields that lie inside of the other one.
///
/// The points of `verts_a` inside of `ellipsoid_b` are pushed first, followed by the points of
/// `verts_b` inside of `ellipsoid_a`. `out` is not cleared.
pub fn shield_pair_points_inside(
    verts_a: &[Point<Real>],
    ellipsoid_a: &Ellipsoid,
    verts_b: &[Point<Real>],
    ellipsoid_b: &Ellipsoid,
    out: &mut Vec<Point<Real>>,
) {
    out.extend(verts_a.iter().filter(|pt| ellipsoid_b.contains_point(pt)));
    out.extend(verts_b.iter().filter(|pt| ellipsoid_a.contains_point(pt)));
}
