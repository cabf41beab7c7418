//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingSphere;
use crate::math::{HomogeneousMatrix, Point, Real, Vector};
use crate::query;
use crate::shape::{OrientedBox, Triangle};
use crate::utils;

/// An Axis-Aligned Bounding Box.
///
/// This is the shape of the world-space bounds reported by rigid bodies, and the shape the
/// batch containment queries extract their eight corners from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates of this box.
    pub mins: Point<Real>,
    /// The point with the largest coordinates of this box.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::MAX` and `maxs`
    /// components set to `-Real::MAX`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new `Aabb` from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this `Aabb`.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this `Aabb`.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Computes the `Aabb` bounding the eight corners of `self` transformed by the
    /// homogeneous matrix `m`.
    ///
    /// The corners go through the full transform, including the perspective divide, so this
    /// works for any affine map, not only rigid ones.
    pub fn transform_by_matrix(&self, m: &HomogeneousMatrix<Real>) -> Self {
        let mut result = Aabb::new_invalid();

        for pt in self.vertices().iter() {
            result.take_point(utils::transform_point(m, pt));
        }

        result
    }

    /// The bounding sphere centered at the center of this `Aabb` and passing through its
    /// corners.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let center = self.center();
        let radius = na::distance(&self.mins, &self.maxs) * 0.5;
        BoundingSphere::new(center, radius)
    }

    /// The point of this `Aabb` closest to `point`.
    #[inline]
    pub fn clamp_point(&self, point: &Point<Real>) -> Point<Real> {
        point.coords.sup(&self.mins.coords).inf(&self.maxs.coords).into()
    }

    /// Does this `Aabb` intersect the given sphere?
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        let closest = self.clamp_point(&sphere.center);
        na::distance_squared(&closest, &sphere.center) <= sphere.radius * sphere.radius
    }

    /// Does this `Aabb` intersect the given triangle?
    ///
    /// Runs a separating axis test between the box (seen as an unrotated oriented box) and
    /// the triangle.
    pub fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        query::obb_triangle_intersect(&OrientedBox::from_aabb(self), triangle)
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Writes the vertices of this `Aabb` into `out`, in the same order as [`Aabb::vertices`].
    #[inline]
    pub fn corners(&self, out: &mut [Point<Real>; 8]) {
        *out = self.vertices();
    }
}
