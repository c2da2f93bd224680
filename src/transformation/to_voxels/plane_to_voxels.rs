use crate::shape::{Disc, Plane};
use crate::transformation::voxelization::{
    scan_cells, VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};

impl Voxelize for Plane {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        self.validate()?;
        let frame = self.frame().ok_or(VoxelizationError::DegenerateNormal)?;

        if self.extent().is_none() {
            let extent = options.unbounded_plane_extent;

            if !extent.is_finite() {
                return Err(VoxelizationError::NonFiniteInput);
            }

            if extent < 0.0 {
                return Err(VoxelizationError::NegativeExtent(extent));
            }

            log::warn!(
                "The plane through {:?} has no finite boundary: it is clipped to {} units around this point.",
                self.point_on_plane,
                extent
            );
        }

        let aabb = self.aabb(options.unbounded_plane_extent);
        scan_cells(aabb.cells()?, options, |pt| self.contains_point(&frame, pt))
    }
}

impl Voxelize for Disc {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        self.to_plane().try_voxelize_with(options)
    }
}
