//! Bounding sphere.

use crate::bounding_volume::details;
use crate::math::{Point, Real, Vector};
use crate::shape::{SupportMap, Triangle};

/// A Bounding Sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The sphere centered at the centroid of a triangle, passing through its farthest vertex.
    pub fn from_triangle(triangle: &Triangle) -> BoundingSphere {
        let (center, radius) = details::point_cloud_bounding_sphere(&triangle.vertices());
        BoundingSphere::new(center, radius)
    }

    /// Is `pt` inside of this sphere or on its boundary?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// Do these two spheres touch or overlap?
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let sum_radius = self.radius + other.radius;

        delta_pos.norm_squared() <= sum_radius * sum_radius
    }
}

impl SupportMap for BoundingSphere {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match dir.try_normalize(Real::EPSILON) {
            Some(n) => self.center + n * self.radius,
            None => self.center,
        }
    }
}
