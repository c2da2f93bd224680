//! Conversion of shapes into sets of voxels and their consumers.

pub use self::dense_grid::DenseGrid;
pub use self::error::VoxelizationError;
pub use self::options::VoxelizationOptions;
pub use self::placement::{place_voxels, VoxelSink};
pub use self::voxel_set::{Voxel, VoxelSet};
pub(crate) use self::voxelize::{check_cell_budget, scan_cells};
pub use self::voxelize::Voxelize;

mod dense_grid;
mod error;
mod options;
mod placement;
mod voxel_set;
mod voxelize;
