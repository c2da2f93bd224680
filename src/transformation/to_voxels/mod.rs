//! Voxelization of every shape.

pub use self::shape_to_voxels::voxelize_all;

mod ball_to_voxels;
mod line_to_voxels;
mod plane_to_voxels;
mod polyhedron_to_voxels;
mod shape_to_voxels;
mod sphere_raster_to_voxels;
mod tube_to_voxels;
