//! Ray-casting against shields and triangles.

pub use self::ray::Ray;
pub use self::ray_ellipsoid::{ray_ellipsoid_distance, ray_toi_with_ball};
pub use self::ray_triangle::{ray_intersects_triangle, ray_triangle_toi, MOLLER_TRUMBORE_EPSILON};

#[doc(hidden)]
pub mod ray;
mod ray_ellipsoid;
mod ray_triangle;
