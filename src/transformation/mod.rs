//! Conversion of continuous shapes into voxels.

pub use self::to_voxels::voxelize_all;

mod to_voxels;
pub mod voxelization;
