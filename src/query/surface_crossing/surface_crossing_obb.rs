use crate::math::{Point, Real};
use crate::query::ray::{ray_ellipsoid_distance, Ray};
use crate::shape::{Ellipsoid, OrientedBox, OBB_EDGES};

/// Options of the box edge solver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeSolverOptions {
    /// Edge hits farther than `reach_factor` times the largest box half-extent from the edge
    /// start are rejected.
    pub reach_factor: Real,
}

impl Default for EdgeSolverOptions {
    fn default() -> Self {
        EdgeSolverOptions { reach_factor: 2.0 }
    }
}

/// A point of `obb` inside of the shield, or a point where one of its edges enters it.
///
/// See [`obb_surface_crossing_with_options`].
#[inline]
pub fn obb_surface_crossing(
    obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    points: &mut [Point<Real>; 9],
) -> Option<Point<Real>> {
    obb_surface_crossing_with_options(obb, ellipsoid, points, &EdgeSolverOptions::default())
}

/// A point of `obb` inside of the shield, or a point where one of its edges enters it.
///
/// The eight corners and the center of `obb` are written to `points` and tested in that
/// order: the first one inside of the shield is returned. If none is inside, the box edges
/// are ray-cast against the shield following [`OBB_EDGES`]; see [`points_surface_crossing`].
pub fn obb_surface_crossing_with_options(
    obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    points: &mut [Point<Real>; 9],
    options: &EdgeSolverOptions,
) -> Option<Point<Real>> {
    obb.corners_and_center(points);
    points_surface_crossing(points, obb.max_half_extent(), ellipsoid, options)
}

/// Surface crossing search over already computed box corners and center.
///
/// Returns the first of `points` inside of the shield. Otherwise, for each edge `(i, j)` of
/// [`OBB_EDGES`], a ray is cast from corner `i` toward corner `j`. The first hit that lies
/// within `options.reach_factor * max_half_extent` of corner `i`, and not farther from
/// corner `j` than corner `i` is, is returned.
pub fn points_surface_crossing(
    points: &[Point<Real>; 9],
    max_half_extent: Real,
    ellipsoid: &Ellipsoid,
    options: &EdgeSolverOptions,
) -> Option<Point<Real>> {
    if let Some(pt) = points.iter().find(|pt| ellipsoid.contains_point(pt)) {
        return Some(*pt);
    }

    let reach = options.reach_factor * max_half_extent;

    for (i, j) in OBB_EDGES.iter() {
        let start = points[*i];
        let end = points[*j];

        let dir = match (end - start).try_normalize(Real::EPSILON) {
            Some(dir) => dir,
            None => continue,
        };

        if let Some(dist) = ray_ellipsoid_distance(ellipsoid, &Ray::new(start, dir)) {
            let hit = start + dir * dist;

            if dist <= reach
                && na::distance_squared(&start, &end) >= na::distance_squared(&end, &hit)
            {
                return Some(hit);
            }
        }
    }

    None
}
