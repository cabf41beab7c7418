/*!
shield3d
========

**shield3d** answers collision and containment questions against
*ellipsoid shields*: unit spheres deformed by an affine transform.

Every query is a pure function over caller-supplied data. Scratch buffers
(box corners, voxel staging buffers) are owned by the caller and passed by
`&mut` so they can be reused across calls without allocating.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod entity;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Matrix4, Point3, Translation3, UnitQuaternion, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The linear-part matrix type.
    pub use Matrix3 as Matrix;

    /// The homogeneous transformation matrix type used by ellipsoid shields.
    pub use Matrix4 as HomogeneousMatrix;

    /// The rigid transformation type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(a: &Point<Real>, b: &Point<Real>) -> Real {
        na::distance(a, b)
    }

    /// Squared euclidean distance between two points.
    #[inline]
    pub fn distance_squared(a: &Point<Real>, b: &Point<Real>) -> Real {
        na::distance_squared(a, b)
    }
}
