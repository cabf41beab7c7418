use crate::math::{Point, Real};

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. Returns the origin if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use shield3d::utils::center;
/// use shield3d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
/// assert!((c.x - 4.0 / 3.0).abs() < 1e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    if pts.is_empty() {
        return Point::origin();
    }

    let denom: Real = 1.0 / (pts.len() as Real);
    let mut piter = pts.iter();
    let mut res = *piter.next().unwrap_or(&Point::origin()) * denom;

    for pt in piter {
        res += pt.coords * denom;
    }

    res
}
