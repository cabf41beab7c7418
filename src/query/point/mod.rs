//! Point projection and distance queries.

pub use self::point_ellipsoid::{
    closest_point_on_ellipsoid, distance_and_closest_point, distance_to_ellipsoid,
    point_in_ellipsoid, signed_distance_and_closest_point, signed_distance_to_ellipsoid,
};
pub use self::point_oriented_box::closest_point_on_obb;
pub use self::point_plane::{closest_point_on_plane, Plane};
pub use self::point_triangle::{closest_point_on_triangle, triangle_distance_squared};

mod point_ellipsoid;
mod point_oriented_box;
mod point_plane;
mod point_triangle;
