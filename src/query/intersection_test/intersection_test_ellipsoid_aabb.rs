use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::Point;
use crate::shape::Ellipsoid;

/// Tests whether an ellipsoid and an axis-aligned box may intersect.
///
/// The box corners are mapped to the local space of the ellipsoid and re-boxed there. The
/// resulting box is tested against the unit sphere. Re-boxing only grows the box, so this never
/// misses an intersection but may report one for boxes close to the surface.
pub fn ellipsoid_aabb_intersect(ellipsoid: &Ellipsoid, aabb: &Aabb) -> bool {
    let local_aabb = aabb.transform_by_matrix(&ellipsoid.inverse);
    local_aabb.intersects_sphere(&BoundingSphere::new(Point::origin(), 1.0))
}
