//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};
use na::Unit;

/// Traits of convex shapes representable by a support mapping function.
///
/// Shapes of this crate live in world space (an ellipsoid carries its own transform), so the
/// support point is expressed in the same frame as `dir`.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }
}
