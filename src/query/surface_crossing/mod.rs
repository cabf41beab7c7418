//! Points where boxes cross the surface of a shield.

pub use self::surface_crossing_block::{
    block_local_crossing, block_surface_crossing, block_surface_crossing_with_options,
    BlockQueryOptions,
};
pub use self::surface_crossing_obb::{
    obb_surface_crossing, obb_surface_crossing_with_options, points_surface_crossing,
    EdgeSolverOptions,
};

mod surface_crossing_block;
mod surface_crossing_obb;
