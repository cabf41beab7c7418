//! Contact tests between shield sample points and voxel terrain.

pub use self::voxel_sampler::{
    trilinear, voxel_contact, voxel_contact_center, voxel_contact_center_with_options,
    voxel_contact_with_options, VoxelSamplerOptions,
};
pub use self::voxel_storage::{VoxelReadBuffer, VoxelStorage, VoxelStorageError};

mod voxel_sampler;
mod voxel_storage;
