//! Motion-based heuristics between moving bodies and shields.
//!
//! Bodies without physics are treated as motionless.

use crate::bounding_volume::BoundingSphere;
use crate::entity::RigidBody;
use crate::math::{Point, Real, Vector};
use crate::query::containment::{closest_vert, point_in_shield};
use crate::query::ray::{ray_ellipsoid_distance, Ray};
use crate::shape::Ellipsoid;
use crate::utils::PHYSICS_STEP;

#[inline]
fn velocity_of<B: RigidBody + ?Sized>(body: &B) -> Vector<Real> {
    body.linear_velocity().unwrap_or_else(Vector::zeros)
}

/// Will `body` be in contact with the shield after one simulation step?
///
/// A ray is cast from the center of the body bounding sphere along its velocity. The result
/// is `true` if the hit is at most one step of motion away, or if the ray misses while the
/// body center is already inside of the shield.
pub fn future_intersect<B: RigidBody + ?Sized>(body: &B, ellipsoid: &Ellipsoid) -> bool {
    let center = body.world_volume().center;
    let step = velocity_of(body) * PHYSICS_STEP;

    match ray_ellipsoid_distance(ellipsoid, &Ray::new(center, step)) {
        Some(dist) => dist <= step.norm(),
        None => point_in_shield(&center, ellipsoid),
    }
}

/// Where the center of the bounding sphere of `body` was `steps` simulation steps ago,
/// assuming a constant velocity.
pub fn past_center<B: RigidBody + ?Sized>(body: &B, steps: u32) -> Point<Real> {
    let center = body.world_volume().center;
    center - velocity_of(body) * (PHYSICS_STEP * steps as Real)
}

/// Are `breaching` and the body carrying the shield moving toward each other?
///
/// `shield_samples` are points of the shield surface and `breach_pos` is a point of the
/// breaching body. `breaching` is approaching if it moves toward the sample closest to
/// `breach_pos`. The shield body is approaching if it moves toward `breach_pos`.
pub fn is_approaching<B1, B2>(
    breaching: &B1,
    shield_body: &B2,
    shield_samples: &[Point<Real>],
    breach_pos: &Point<Real>,
) -> bool
where
    B1: RigidBody + ?Sized,
    B2: RigidBody + ?Sized,
{
    let breaching_center = breaching.world_volume().center;
    let shield_center = shield_body.world_volume().center;

    let breaching_approaching = closest_vert(shield_samples, breach_pos, None)
        .map(|shield_pos| velocity_of(breaching).dot(&(breaching_center - shield_pos)) < 0.0)
        .unwrap_or(false);
    let shield_approaching = velocity_of(shield_body).dot(&(shield_center - breach_pos)) < 0.0;

    breaching_approaching || shield_approaching
}

/// The point of `sphere` toward `target`, but not beyond it.
fn point_toward(sphere: &BoundingSphere, target: &Point<Real>, radius: Real) -> Point<Real> {
    let dir = target - sphere.center;
    let len = dir.norm();

    if len <= 0.0 {
        return sphere.center;
    }

    sphere.center + dir * (len.min(radius) / len)
}

/// The point of the bounding sphere of `body` facing the shield center.
///
/// If the shield center is inside of the sphere, the shield center itself is returned.
pub fn contact_point_outside<B: RigidBody + ?Sized>(body: &B, ellipsoid: &Ellipsoid) -> Point<Real> {
    let volume = body.world_volume();
    point_toward(&volume, &ellipsoid.center(), volume.radius)
}

/// Does the bounding sphere of `body`, grown by one unit, reach into `detect`?
///
/// Only the point of the grown sphere facing the center of `ellipsoid` is tested.
pub fn sphere_touch_outside<B: RigidBody + ?Sized>(
    body: &B,
    ellipsoid: &Ellipsoid,
    detect: &Ellipsoid,
) -> bool {
    let volume = body.world_volume();
    let pt = point_toward(&volume, &ellipsoid.center(), volume.radius + 1.0);
    detect.contains_point(&pt)
}
