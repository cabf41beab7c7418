//! Boolean intersection tests between the shapes of this crate.

pub use self::intersection_test_ellipsoid_aabb::ellipsoid_aabb_intersect;
pub use self::intersection_test_ellipsoid_ellipsoid::{
    ellipsoids_intersect, ellipsoids_intersect_with_options,
};
pub use self::intersection_test_obb_sphere::obb_sphere_intersect;
pub use self::intersection_test_sphere_triangle::spheres_intersect;

mod intersection_test_ellipsoid_aabb;
mod intersection_test_ellipsoid_ellipsoid;
mod intersection_test_obb_sphere;
mod intersection_test_sphere_triangle;
