use crate::bounding_volume::BoundingSphere;
use crate::query::point::closest_point_on_obb;
use crate::shape::OrientedBox;

/// Tests whether an oriented box and a sphere intersect.
#[inline]
pub fn obb_sphere_intersect(obb: &OrientedBox, sphere: &BoundingSphere) -> bool {
    let closest = closest_point_on_obb(obb, &sphere.center);
    na::distance_squared(&closest, &sphere.center) <= sphere.radius * sphere.radius
}
