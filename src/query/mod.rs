//! Non-persistent geometric queries against ellipsoid shields.
//!
//! # Shield queries
//! The most common entry points are:
//!
//! * [`query::point_in_ellipsoid()`] and the batch tests of [`query::containment`] to check
//!   whether points, boxes or bodies are inside of a shield.
//! * [`query::ray_ellipsoid_distance()`] to cast a ray against a shield.
//! * [`query::closest_point_on_ellipsoid()`] and [`query::signed_distance_to_ellipsoid()`]
//!   to project points on a shield surface.
//! * [`query::ellipsoids_intersect()`] to test two shields against each other.
//! * [`query::obb_surface_crossing()`] and [`query::block_surface_crossing()`] to find where a
//!   box enters a shield.
//! * [`query::voxel_contact()`] to test shield sample points against voxel terrain.
//!
//! Functions with a `_with_options` suffix take an options struct; the plain version uses its
//! `Default` value.
//!
//! [`query::point_in_ellipsoid()`]: crate::query::point_in_ellipsoid
//! [`query::containment`]: crate::query::containment
//! [`query::ray_ellipsoid_distance()`]: crate::query::ray_ellipsoid_distance
//! [`query::closest_point_on_ellipsoid()`]: crate::query::closest_point_on_ellipsoid
//! [`query::signed_distance_to_ellipsoid()`]: crate::query::signed_distance_to_ellipsoid
//! [`query::ellipsoids_intersect()`]: crate::query::ellipsoids_intersect
//! [`query::obb_surface_crossing()`]: crate::query::obb_surface_crossing
//! [`query::block_surface_crossing()`]: crate::query::block_surface_crossing
//! [`query::voxel_contact()`]: crate::query::voxel_contact

pub use self::gjk::GjkOptions;
pub use self::intersection_test::{
    ellipsoid_aabb_intersect, ellipsoids_intersect, ellipsoids_intersect_with_options,
    obb_sphere_intersect, spheres_intersect,
};
pub use self::motion::{
    contact_point_outside, future_intersect, is_approaching, past_center, sphere_touch_outside,
};
pub use self::point::{
    closest_point_on_ellipsoid, closest_point_on_obb, closest_point_on_plane,
    closest_point_on_triangle, distance_and_closest_point, distance_to_ellipsoid,
    point_in_ellipsoid, signed_distance_and_closest_point, signed_distance_to_ellipsoid,
    triangle_distance_squared, Plane,
};
pub use self::ray::{ray_ellipsoid_distance, ray_intersects_triangle, ray_triangle_toi, Ray};
pub use self::sat::obb_triangle_intersect;
pub use self::surface_crossing::{
    block_local_crossing, block_surface_crossing, block_surface_crossing_with_options,
    obb_surface_crossing, obb_surface_crossing_with_options, BlockQueryOptions,
    EdgeSolverOptions,
};
pub use self::voxel::{
    voxel_contact, voxel_contact_center, VoxelReadBuffer, VoxelSamplerOptions, VoxelStorage,
    VoxelStorageError,
};

pub mod containment;
pub mod gjk;
mod intersection_test;
mod motion;
pub mod point;
pub mod ray;
pub mod sat;
mod surface_crossing;
pub mod voxel;

/// Queries dedicated to specific pairs of shapes, and their building blocks.
pub mod details {
    pub use super::ray::{ray_toi_with_ball, MOLLER_TRUMBORE_EPSILON};
    pub use super::sat::{obb_triangle_intersect_with_axes, obb_triangle_separated_on_axis};
    pub use super::surface_crossing::points_surface_crossing;
    pub use super::voxel::{
        trilinear, voxel_contact_center_with_options, voxel_contact_with_options,
    };
}
