use crate::shape::VoxelShape;
use crate::transformation::voxelization::{
    VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};

impl Voxelize for VoxelShape {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        match self {
            VoxelShape::Ball(s) => s.try_voxelize_with(options),
            VoxelShape::Tube(s) => s.try_voxelize_with(options),
            VoxelShape::Line(s) => s.try_voxelize_with(options),
            VoxelShape::Plane(s) => s.try_voxelize_with(options),
            VoxelShape::Disc(s) => s.try_voxelize_with(options),
            VoxelShape::OrientedCube(s) => s.try_voxelize_with(options),
            VoxelShape::Tetrahedron(s) => s.try_voxelize_with(options),
        }
    }
}

/// Voxelizes independent shapes, returning one set per shape in the same order.
///
/// Invalid shapes are logged and produce an empty set. With the `parallel` feature, the
/// shapes are voxelized in parallel.
pub fn voxelize_all(shapes: &[VoxelShape], options: &VoxelizationOptions) -> Vec<VoxelSet> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        shapes
            .par_iter()
            .map(|shape| shape.voxelize_with(options))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        shapes
            .iter()
            .map(|shape| shape.voxelize_with(options))
            .collect()
    }
}
