use crate::math::{Point, Real, Vector};
use na::Unit;

/// A plane `{ p | normal · p = d }`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The plane normal.
    pub normal: Unit<Vector<Real>>,
    /// Signed distance from the origin to the plane, along `normal`.
    pub d: Real,
}

impl Plane {
    /// Creates the plane with the given normal and offset.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, d: Real) -> Self {
        Plane { normal, d }
    }

    /// The plane with the given normal passing through `pt`.
    #[inline]
    pub fn from_point_normal(pt: &Point<Real>, normal: Unit<Vector<Real>>) -> Self {
        Plane::new(normal, normal.dot(&pt.coords))
    }

    /// Signed distance from `pt` to this plane, positive on the side `normal` points to.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.d
    }
}

/// Orthogonal projection of `pt` on `plane`.
#[inline]
pub fn closest_point_on_plane(plane: &Plane, pt: &Point<Real>) -> Point<Real> {
    pt - *plane.normal * plane.signed_distance(pt)
}
