use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::math::{HomogeneousMatrix, Point, Real, Rotation, Translation, Vector};
use crate::shape::SupportMap;
use crate::utils::{self, INSIDE_THRESHOLD};

/// An ellipsoid shield: the unit sphere centered at the origin, deformed by an affine map.
///
/// The shield is stored as the pair of its world transform `matrix` and the inverse of that
/// transform. The columns of the linear part of `matrix` are the semi-axes of the ellipsoid,
/// and its last column is the ellipsoid center. Queries never modify either matrix; callers
/// building an `Ellipsoid` through [`Ellipsoid::from_parts`] are responsible for keeping
/// `inverse` equal to the inverse of `matrix`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    /// Maps the unit sphere to the ellipsoid.
    pub matrix: HomogeneousMatrix<Real>,
    /// Maps world space to the local space where the ellipsoid is the unit sphere.
    pub inverse: HomogeneousMatrix<Real>,
}

impl Ellipsoid {
    /// Creates an ellipsoid from its world transform.
    ///
    /// Returns `None` if `matrix` is not invertible.
    #[inline]
    pub fn new(matrix: HomogeneousMatrix<Real>) -> Option<Ellipsoid> {
        let inverse = matrix.try_inverse()?;
        Some(Ellipsoid { matrix, inverse })
    }

    /// Creates an ellipsoid from a world transform and its already computed inverse.
    ///
    /// No check is performed on the consistency of the two matrices.
    #[inline]
    pub fn from_parts(matrix: HomogeneousMatrix<Real>, inverse: HomogeneousMatrix<Real>) -> Ellipsoid {
        Ellipsoid { matrix, inverse }
    }

    /// Creates an ellipsoid centered at `center`, with the given semi-axes lengths along the
    /// local axes rotated by `rotation`.
    ///
    /// Returns `None` if one of the semi-axes is not strictly positive and finite.
    pub fn from_center_axes(
        center: Point<Real>,
        semi_axes: Vector<Real>,
        rotation: &Rotation<Real>,
    ) -> Option<Ellipsoid> {
        if semi_axes.iter().any(|a| *a <= 0.0 || !a.is_finite()) {
            return None;
        }

        let inv_axes = semi_axes.map(|a| 1.0 / a);
        let matrix = Translation::from(center.coords).to_homogeneous()
            * rotation.to_homogeneous()
            * HomogeneousMatrix::new_nonuniform_scaling(&semi_axes);
        let inverse = HomogeneousMatrix::new_nonuniform_scaling(&inv_axes)
            * rotation.inverse().to_homogeneous()
            * Translation::from(-center.coords).to_homogeneous();

        Some(Ellipsoid { matrix, inverse })
    }

    /// The unit sphere centered at the origin.
    #[inline]
    pub fn unit_sphere() -> Ellipsoid {
        Ellipsoid {
            matrix: HomogeneousMatrix::identity(),
            inverse: HomogeneousMatrix::identity(),
        }
    }

    /// The center of this ellipsoid, i.e., the translation part of its transform.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// The lengths of the three semi-axes.
    #[inline]
    pub fn semi_axes(&self) -> Vector<Real> {
        let lin = utils::linear_part(&self.matrix);
        Vector::new(
            lin.column(0).norm(),
            lin.column(1).norm(),
            lin.column(2).norm(),
        )
    }

    /// The length of the largest semi-axis.
    #[inline]
    pub fn max_radius(&self) -> Real {
        self.semi_axes().max()
    }

    /// Maps a world-space point to the local space of this ellipsoid.
    #[inline]
    pub fn to_local(&self, pt: &Point<Real>) -> Point<Real> {
        utils::transform_point(&self.inverse, pt)
    }

    /// Maps a point from the local space of this ellipsoid to world space.
    #[inline]
    pub fn to_world(&self, pt: &Point<Real>) -> Point<Real> {
        utils::transform_point(&self.matrix, pt)
    }

    /// The squared length of `pt` once mapped to the local space of this ellipsoid.
    ///
    /// This is at most `1.0` for points inside of the ellipsoid.
    #[inline]
    pub fn local_norm_squared(&self, pt: &Point<Real>) -> Real {
        self.to_local(pt).coords.norm_squared()
    }

    /// Is `pt` inside of this ellipsoid or on its boundary?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.local_norm_squared(pt) <= INSIDE_THRESHOLD
    }

    /// The sphere centered at this ellipsoid center with the largest semi-axis as radius.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center(), self.max_radius())
    }

    /// The tightest axis-aligned box containing this ellipsoid.
    ///
    /// The half-extent along each world axis is the norm of the matching row of the linear
    /// part of the transform.
    pub fn aabb(&self) -> Aabb {
        let lin = utils::linear_part(&self.matrix);
        let half_extents = Vector::new(lin.row(0).norm(), lin.row(1).norm(), lin.row(2).norm());
        Aabb::from_half_extents(self.center(), half_extents)
    }
}

impl SupportMap for Ellipsoid {
    /// Approximate support point, pushed onto the bounding sphere of the largest semi-axis.
    ///
    /// The direction is brought to local space by the transpose of the linear part,
    /// normalized, and mapped back. The resulting world direction is then scaled by
    /// [`Ellipsoid::max_radius`] so the returned point lies on the bounding sphere rather than
    /// on the ellipsoid surface. Overlap tests built on it are therefore conservative for
    /// elongated shields.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let lin = utils::linear_part(&self.matrix);
        let center = self.center();

        let local_dir = match (lin.transpose() * dir).try_normalize(Real::EPSILON) {
            Some(local_dir) => local_dir,
            None => return center,
        };

        match (lin * local_dir).try_normalize(Real::EPSILON) {
            Some(world_dir) => center + world_dir * self.max_radius(),
            None => center,
        }
    }
}
