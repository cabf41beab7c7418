use crate::math::{Point, Real, Vector};
use crate::shape::Ellipsoid;
use crate::utils::INSIDE_THRESHOLD;

/// Radial projection of a local-space point onto the unit sphere.
///
/// The origin has no radial direction: it is projected onto the local `+x` axis.
#[inline]
fn project_local_point_on_unit_sphere(local: &Point<Real>) -> Point<Real> {
    Point::from(local.coords.try_normalize(0.0).unwrap_or_else(Vector::x))
}

/// The point of the surface of `ellipsoid` obtained by projecting `pt` radially.
///
/// The point is brought to the local space of the ellipsoid, normalized there, and mapped
/// back. This is the true closest point for spheres; for other ellipsoids it is the surface
/// point on the segment joining the center and `pt` (or its extension).
///
/// If `pt` is exactly at the ellipsoid center, the image of the local `+x` axis is returned.
#[inline]
pub fn closest_point_on_ellipsoid(ellipsoid: &Ellipsoid, pt: &Point<Real>) -> Point<Real> {
    let local = ellipsoid.to_local(pt);
    ellipsoid.to_world(&project_local_point_on_unit_sphere(&local))
}

/// Signed distance between `pt` and its projection on the ellipsoid surface, together with
/// that projection.
///
/// The distance is negative when `pt` is strictly inside of the ellipsoid. The projection is
/// the one computed by [`closest_point_on_ellipsoid`].
pub fn signed_distance_and_closest_point(
    ellipsoid: &Ellipsoid,
    pt: &Point<Real>,
) -> (Real, Point<Real>) {
    let local = ellipsoid.to_local(pt);
    let closest = ellipsoid.to_world(&project_local_point_on_unit_sphere(&local));
    let dist = na::distance(&closest, pt);

    if local.coords.norm_squared() < INSIDE_THRESHOLD {
        (-dist, closest)
    } else {
        (dist, closest)
    }
}

/// Signed distance between `pt` and the ellipsoid surface; negative inside.
#[inline]
pub fn signed_distance_to_ellipsoid(ellipsoid: &Ellipsoid, pt: &Point<Real>) -> Real {
    signed_distance_and_closest_point(ellipsoid, pt).0
}

/// Unsigned distance between `pt` and its projection on the ellipsoid surface, together with
/// that projection.
#[inline]
pub fn distance_and_closest_point(ellipsoid: &Ellipsoid, pt: &Point<Real>) -> (Real, Point<Real>) {
    let closest = closest_point_on_ellipsoid(ellipsoid, pt);
    (na::distance(&closest, pt), closest)
}

/// Unsigned distance between `pt` and the ellipsoid surface.
#[inline]
pub fn distance_to_ellipsoid(ellipsoid: &Ellipsoid, pt: &Point<Real>) -> Real {
    distance_and_closest_point(ellipsoid, pt).0
}

/// Is `pt` inside of the ellipsoid or on its boundary?
#[inline]
pub fn point_in_ellipsoid(ellipsoid: &Ellipsoid, pt: &Point<Real>) -> bool {
    ellipsoid.local_norm_squared(pt) <= INSIDE_THRESHOLD
}
