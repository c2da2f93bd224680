use crate::shape::Line;
use crate::transformation::voxelization::{
    check_cell_budget, VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};

impl Voxelize for Line {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        check_cell_budget(self.num_voxels()?, options)?;

        Ok(self.path().into_iter().collect())
    }
}
