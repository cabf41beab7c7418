//! The Gilbert-Johnson-Keerthi overlap test for convex shapes given by support maps.

pub use self::cso_point::CsoPoint;
pub use self::gjk::{intersection_test, GjkOptions};
pub use self::simplex::Simplex;

mod cso_point;
mod gjk;
mod simplex;
