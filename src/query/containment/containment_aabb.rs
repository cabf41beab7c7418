use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Ellipsoid;
use crate::utils::NEAR_THRESHOLD;

/// Counts the center and corners of `aabb` inside of the shield.
///
/// The center is tested first. With `first_match`, counting stops at the first point found
/// inside, so the result is `0` or `1`; the corners are not written to `corners` when the
/// center already matched.
pub fn corner_or_center_in_shield(
    aabb: &Aabb,
    ellipsoid: &Ellipsoid,
    corners: &mut [Point<Real>; 8],
    first_match: bool,
) -> usize {
    let mut count = 0;

    if ellipsoid.contains_point(&aabb.center()) {
        count += 1;

        if first_match {
            return count;
        }
    }

    aabb.corners(corners);

    for pt in corners.iter() {
        if ellipsoid.contains_point(pt) {
            count += 1;

            if first_match {
                return count;
            }
        }
    }

    count
}

/// Number of corners of `aabb` inside of the shield.
pub fn corners_in_shield_count(
    aabb: &Aabb,
    ellipsoid: &Ellipsoid,
    corners: &mut [Point<Real>; 8],
) -> usize {
    aabb.corners(corners);
    corners
        .iter()
        .filter(|pt| ellipsoid.contains_point(pt))
        .count()
}

/// Are all the corners of `aabb` inside of the shield?
#[inline]
pub fn all_aabb_in_shield(aabb: &Aabb, ellipsoid: &Ellipsoid, corners: &mut [Point<Real>; 8]) -> bool {
    corners_in_shield_count(aabb, ellipsoid, corners) == 8
}

/// Counts the corners of `aabb` inside of the shield, in corner order, until the first corner
/// found outside after at least one corner was found inside.
///
/// A result strictly between `0` and `8` therefore proves that the box straddles the shield
/// surface, without testing every corner.
pub fn not_all_corners_in_shield(
    aabb: &Aabb,
    ellipsoid: &Ellipsoid,
    corners: &mut [Point<Real>; 8],
) -> usize {
    aabb.corners(corners);

    let mut count = 0;

    for pt in corners.iter() {
        if ellipsoid.contains_point(pt) {
            count += 1;
        } else if count != 0 {
            break;
        }
    }

    count
}

/// Number of corners of `aabb` near the shield, i.e., with a local squared length at most
/// [`NEAR_THRESHOLD`].
pub fn corners_near_shield(aabb: &Aabb, ellipsoid: &Ellipsoid, corners: &mut [Point<Real>; 8]) -> usize {
    aabb.corners(corners);
    corners
        .iter()
        .filter(|pt| ellipsoid.local_norm_squared(pt) <= NEAR_THRESHOLD)
        .count()
}
