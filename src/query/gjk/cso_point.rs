use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CsoPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The support point of the first shape.
    pub orig1: Point<Real>,
    /// The support point of the second shape.
    pub orig2: Point<Real>,
}

impl CsoPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        let point = Point::from(orig1 - orig2);
        CsoPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the direction `dir`.
    ///
    /// This is `g1.support_point(dir) - g2.support_point(-dir)`.
    pub fn from_shapes<G1: ?Sized, G2: ?Sized>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let sp1 = g1.support_point(dir);
        let sp2 = g2.support_point(&-*dir);

        CsoPoint::new(sp1, sp2)
    }
}

impl Sub<CsoPoint> for CsoPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CsoPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
