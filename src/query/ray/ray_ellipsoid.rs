use crate::math::{Point, Real};
use crate::query::Ray;
use crate::shape::Ellipsoid;
use crate::utils;
use num::Zero;

/// Computes the time of impact of a ray on a ball.
///
/// The first result element is `true` if the ray started inside of the ball.
#[inline]
pub fn ray_toi_with_ball(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
    solid: bool,
) -> (bool, Option<Real>) {
    let dcenter = ray.origin - *center;

    let a = ray.dir.norm_squared();
    let b = dcenter.dot(&ray.dir);
    let c = dcenter.norm_squared() - radius * radius;

    // Special case for when the dir is zero.
    if a.is_zero() {
        if c > 0.0 {
            return (false, None);
        } else {
            return (true, Some(0.0));
        }
    }

    if c > 0.0 && b > 0.0 {
        (false, None)
    } else {
        let delta = b * b - a * c;

        if delta < 0.0 {
            // no solution
            (false, None)
        } else {
            let t = (-b - delta.sqrt()) / a;

            if t <= 0.0 {
                // origin inside of the ball
                if solid {
                    (true, Some(0.0))
                } else {
                    (true, Some((-b + delta.sqrt()) / a))
                }
            } else {
                (false, Some(t))
            }
        }
    }
}

/// World-space distance from the origin of `ray` to the point where it enters `ellipsoid`.
///
/// The ray is brought to the local space of the ellipsoid (its direction normalized there),
/// intersected with the unit sphere, and the local hit point is mapped back to world space.
/// The returned value is the distance between the world hit point and `ray.origin`; when
/// `ray.dir` has unit length it is also the parameter of the hit along the ray.
///
/// Returns `None` if the ray misses, if its direction is zero, if it starts inside of the
/// ellipsoid or on its boundary, or if the computation produced a NaN.
pub fn ray_ellipsoid_distance(ellipsoid: &Ellipsoid, ray: &Ray) -> Option<Real> {
    let local_origin = utils::transform_point(&ellipsoid.inverse, &ray.origin);
    let local_dir = utils::transform_vector(&ellipsoid.inverse, &ray.dir)
        .try_normalize(Real::EPSILON)?;
    let local_ray = Ray::new(local_origin, local_dir);

    let toi = ray_toi_with_ball(&Point::origin(), 1.0, &local_ray, true).1?;

    if toi <= 0.0 {
        return None;
    }

    let world_hit = utils::transform_point(&ellipsoid.matrix, &local_ray.point_at(toi));
    let distance = na::distance(&world_hit, &ray.origin);

    if distance.is_nan() {
        None
    } else {
        Some(distance)
    }
}
