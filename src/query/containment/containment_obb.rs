use crate::bounding_volume::{details, BoundingSphere};
use crate::math::{Point, Real};
use crate::shape::{Ellipsoid, OrientedBox, CENTER_SLOT};
use crate::utils::INSIDE_THRESHOLD;

/// Tests the corners of `obb` against the shield.
///
/// With `any_corner`, returns `true` as soon as one corner is inside. Otherwise, returns `true`
/// only if all eight corners are inside.
pub fn obb_corners_in_shield(
    obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    corners: &mut [Point<Real>; 8],
    any_corner: bool,
) -> bool {
    obb.corners(corners);

    let mut count = 0;

    for pt in corners.iter() {
        if ellipsoid.contains_point(pt) {
            if any_corner {
                return true;
            }
            count += 1;
        }
    }

    count == 8
}

/// Number of the eight corners and the center of `obb` inside of the shield.
///
/// The center is written at [`CENTER_SLOT`] of `points`.
pub fn obb_points_in_shield(
    obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    points: &mut [Point<Real>; 9],
) -> usize {
    obb.corners_and_center(points);
    debug_assert_eq!(points[CENTER_SLOT], obb.center);
    points
        .iter()
        .filter(|pt| ellipsoid.contains_point(pt))
        .count()
}

/// Number of corners of `obb` inside of the shield.
pub fn obb_corners_in_shield_count(
    obb: &OrientedBox,
    ellipsoid: &Ellipsoid,
    corners: &mut [Point<Real>; 8],
) -> usize {
    obb.corners(corners);
    corners
        .iter()
        .filter(|pt| ellipsoid.contains_point(pt))
        .count()
}

/// Finds the corner deepest inside of the shield.
///
/// `closest` is set to the corner with the smallest local squared length among the corners
/// inside of the shield. It is left untouched if no corner is inside.
pub fn closest_corner_in_shield(
    corners: &[Point<Real>; 8],
    ellipsoid: &Ellipsoid,
    closest: &mut Point<Real>,
) {
    let mut best = Real::MAX;

    for pt in corners.iter() {
        let sq = ellipsoid.local_norm_squared(pt);

        if sq <= INSIDE_THRESHOLD && sq < best {
            best = sq;
            *closest = *pt;
        }
    }
}

/// The bounding sphere of the two corners of `obb` closest to `pos`, and of the box center.
pub fn obb_closest_corners_sphere(obb: &OrientedBox, pos: &Point<Real>) -> BoundingSphere {
    let mut corners = [Point::origin(); 8];
    obb.corners(&mut corners);

    let mut nearest = (Real::MAX, 0);
    let mut second = (Real::MAX, 0);

    for (i, pt) in corners.iter().enumerate() {
        let sq = na::distance_squared(pt, pos);

        if sq < nearest.0 {
            second = nearest;
            nearest = (sq, i);
        } else if sq < second.0 {
            second = (sq, i);
        }
    }

    let pts = [corners[nearest.1], corners[second.1], obb.center];
    let (center, radius) = details::point_cloud_bounding_sphere(&pts);
    BoundingSphere::new(center, radius)
}
