use crate::shape::Tube;
use crate::transformation::voxelization::{
    scan_cells, VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};

impl Voxelize for Tube {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        self.validate()?;

        if self.outer_thickness == 0.0 {
            return Ok(VoxelSet::new());
        }

        scan_cells(self.aabb().cells()?, options, |pt| self.contains_point(pt))
    }
}
