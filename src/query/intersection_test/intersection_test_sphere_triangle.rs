use crate::bounding_volume::BoundingSphere;
use crate::shape::Triangle;

/// Tests whether a sphere intersects the bounding sphere of a triangle.
///
/// The triangle bounding sphere is centered at its centroid and passes through its farthest
/// vertex. This is a cheap prefilter for exact box/triangle tests.
#[inline]
pub fn spheres_intersect(sphere: &BoundingSphere, triangle: &Triangle) -> bool {
    BoundingSphere::from_triangle(triangle).intersects(sphere)
}
