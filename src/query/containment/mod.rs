//! Batch point and corner containment tests against ellipsoid shields.
//!
//! Every test compares the squared length of points mapped to the local space of the shield
//! against [`INSIDE_THRESHOLD`](crate::utils::INSIDE_THRESHOLD), or against
//! [`NEAR_THRESHOLD`](crate::utils::NEAR_THRESHOLD) for the "near" variant. Corner buffers are
//! provided by the caller and overwritten.

pub use self::containment_aabb::{
    all_aabb_in_shield, corner_or_center_in_shield, corners_in_shield_count,
    corners_near_shield, not_all_corners_in_shield,
};
pub use self::containment_obb::{
    closest_corner_in_shield, obb_closest_corners_sphere, obb_corners_in_shield,
    obb_corners_in_shield_count, obb_points_in_shield,
};
pub use self::containment_points::{
    point_in_shield, points_in_shield_count, shield_pair_points_inside,
};
#[cfg(feature = "parallel")]
pub use self::containment_points::points_in_shield_par;
pub use self::nearest_samples::{
    closest_triangle, closest_vert, closest_vert_index, intersect_small_box,
};

mod containment_aabb;
mod containment_obb;
mod containment_points;
mod nearest_samples;
