use crate::math::{Point, Real};
use crate::shape::OrientedBox;

/// The point of the solid oriented box closest to `pt`.
///
/// The offset from the box center is projected on each box axis and clamped to the matching
/// half-extent. Points inside of the box are returned unchanged.
pub fn closest_point_on_obb(obb: &OrientedBox, pt: &Point<Real>) -> Point<Real> {
    let delta = pt - obb.center;
    let mut result = obb.center;

    for (axis, half_extent) in obb.axes().iter().zip(obb.half_extents.iter()) {
        let dist = axis.dot(&delta).max(-*half_extent).min(*half_extent);
        result += axis * dist;
    }

    result
}
