//! Homogeneous transformation of points and vectors.

use crate::math::{HomogeneousMatrix, Matrix, Point, Real, Vector};

/// Transforms a point by a homogeneous matrix, including the perspective divide.
///
/// The `w` component is computed from the last row of `m` and the point extended with a
/// unit fourth coordinate, and the result is divided through by it. The divide is not
/// guarded: a zero `w` yields non-finite coordinates. Affine matrices always have `w == 1`.
#[inline]
pub fn transform_point(m: &HomogeneousMatrix<Real>, pt: &Point<Real>) -> Point<Real> {
    let x = m[(0, 0)] * pt.x + m[(0, 1)] * pt.y + m[(0, 2)] * pt.z + m[(0, 3)];
    let y = m[(1, 0)] * pt.x + m[(1, 1)] * pt.y + m[(1, 2)] * pt.z + m[(1, 3)];
    let z = m[(2, 0)] * pt.x + m[(2, 1)] * pt.y + m[(2, 2)] * pt.z + m[(2, 3)];
    let w = m[(3, 0)] * pt.x + m[(3, 1)] * pt.y + m[(3, 2)] * pt.z + m[(3, 3)];

    let inv_w = 1.0 / w;
    Point::new(x * inv_w, y * inv_w, z * inv_w)
}

/// Transforms a vector by the linear (upper-left 3x3) part of a homogeneous matrix.
///
/// Translation and projective terms are ignored.
#[inline]
pub fn transform_vector(m: &HomogeneousMatrix<Real>, v: &Vector<Real>) -> Vector<Real> {
    Vector::new(
        m[(0, 0)] * v.x + m[(0, 1)] * v.y + m[(0, 2)] * v.z,
        m[(1, 0)] * v.x + m[(1, 1)] * v.y + m[(1, 2)] * v.z,
        m[(2, 0)] * v.x + m[(2, 1)] * v.y + m[(2, 2)] * v.z,
    )
}

/// The linear (upper-left 3x3) part of a homogeneous matrix.
#[inline]
pub fn linear_part(m: &HomogeneousMatrix<Real>) -> Matrix<Real> {
    m.fixed_view::<3, 3>(0, 0).into_owned()
}
