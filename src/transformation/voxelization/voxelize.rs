use crate::bounding_volume::CellRange;
use crate::math::{Point, Real};
use crate::transformation::voxelization::{
    Voxel, VoxelSet, VoxelizationError, VoxelizationOptions,
};

/// Conversion of a shape into the set of voxels whose center lies inside of it.
///
/// Implementors only provide [`Voxelize::try_voxelize_with`]. The infallible methods never
/// fail: invalid shapes are reported through the `log` facade and produce an empty set.
pub trait Voxelize {
    /// Computes the voxels of this shape, or the reason why the shape is invalid.
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError>;

    /// Computes the voxels of this shape with the default options, or the reason why the
    /// shape is invalid.
    fn try_voxelize(&self) -> Result<VoxelSet, VoxelizationError> {
        self.try_voxelize_with(&VoxelizationOptions::default())
    }

    /// Computes the voxels of this shape.
    ///
    /// Returns an empty set, and logs the error, if the shape is invalid.
    fn voxelize_with(&self, options: &VoxelizationOptions) -> VoxelSet {
        self.try_voxelize_with(options).unwrap_or_else(|err| {
            err.log();
            VoxelSet::new()
        })
    }

    /// Computes the voxels of this shape with the default options.
    ///
    /// Returns an empty set, and logs the error, if the shape is invalid.
    fn voxelize(&self) -> VoxelSet {
        self.voxelize_with(&VoxelizationOptions::default())
    }
}

/// Checks that `num_cells` doesn't exceed the maximum number of cells allowed by `options`.
pub(crate) fn check_cell_budget(
    num_cells: u64,
    options: &VoxelizationOptions,
) -> Result<(), VoxelizationError> {
    match options.max_cells {
        Some(max) if num_cells > max => Err(VoxelizationError::TooManyCells {
            cells: num_cells,
            max,
        }),
        _ => Ok(()),
    }
}

/// Collects the cells of `cells` whose center satisfies `is_inside`.
///
/// The cells are visited in lexicographic order so the result is sorted by construction.
/// With the `parallel` feature, the slices of constant `x` are scanned in parallel.
pub(crate) fn scan_cells<F>(
    cells: CellRange,
    options: &VoxelizationOptions,
    is_inside: F,
) -> Result<VoxelSet, VoxelizationError>
where
    F: Fn(&Point<Real>) -> bool + Sync,
{
    let num_cells = cells.num_cells();
    check_cell_budget(num_cells, options)?;
    log::debug!(
        "Scanning {} cells from {:?} to {:?}.",
        num_cells,
        cells.mins,
        cells.maxs
    );

    let is_inside = &is_inside;
    let scan_slice = move |x: i32| {
        cells
            .slice_x(x)
            .map(Voxel::from)
            .filter(move |voxel| is_inside(&voxel.center()))
    };

    #[cfg(feature = "parallel")]
    let voxels = {
        use rayon::prelude::*;
        (cells.mins.x..=cells.maxs.x)
            .into_par_iter()
            .flat_map_iter(scan_slice)
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let voxels = (cells.mins.x..=cells.maxs.x).flat_map(scan_slice).collect();

    Ok(VoxelSet::from_sorted(voxels))
}
