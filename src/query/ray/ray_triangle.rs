use crate::math::Real;
use crate::query::Ray;
use crate::shape::Triangle;

/// Threshold under which the determinant of the Möller–Trumbore system is considered zero,
/// and under which a time of impact is not counted as a hit.
pub const MOLLER_TRUMBORE_EPSILON: Real = 1.0e-7;

/// Computes the time of impact of a ray on a triangle with the Möller–Trumbore algorithm.
///
/// The time of impact is expressed in multiples of `ray.dir`, which does not need to be
/// normalized. Both faces of the triangle are hit. Returns `None` when the ray is parallel to
/// the triangle plane, misses the triangle, or hits it at a parameter not larger than
/// [`MOLLER_TRUMBORE_EPSILON`].
pub fn ray_triangle_toi(ray: &Ray, triangle: &Triangle) -> Option<Real> {
    let edge1 = triangle.b - triangle.a;
    let edge2 = triangle.c - triangle.a;
    let h = ray.dir.cross(&edge2);
    let a = edge1.dot(&h);

    if a > -MOLLER_TRUMBORE_EPSILON && a < MOLLER_TRUMBORE_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - triangle.a;
    let u = f * s.dot(&h);

    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = s.cross(&edge1);
    let v = f * ray.dir.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(&q);

    if t > MOLLER_TRUMBORE_EPSILON {
        Some(t)
    } else {
        None
    }
}

/// Does the ray hit the triangle?
///
/// See [`ray_triangle_toi`] for the conditions of a hit.
#[inline]
pub fn ray_intersects_triangle(ray: &Ray, triangle: &Triangle) -> bool {
    ray_triangle_toi(ray, triangle).is_some()
}
