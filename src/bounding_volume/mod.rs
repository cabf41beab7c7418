//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_utils;

pub mod details {
    //! Free functions used to build bounding volumes.
    pub use super::bounding_sphere_utils::{
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    };
}
