use crate::math::{GridPoint, Point, Real};
use crate::transformation::voxelization::VoxelizationError;
use num::ToPrimitive;

/// Snaps each coordinate of `pt` to an integer with `snap`, then converts it to a grid
/// coordinate.
///
/// Fails with [`VoxelizationError::NonFiniteInput`] if a coordinate is not finite, and with
/// [`VoxelizationError::CoordinateOutOfRange`] if a snapped coordinate doesn't fit in an `i32`.
pub fn snap_to_grid(
    pt: &Point<Real>,
    snap: fn(Real) -> Real,
) -> Result<GridPoint, VoxelizationError> {
    let mut result = GridPoint::origin();

    for (cell, e) in result.iter_mut().zip(pt.iter()) {
        if !e.is_finite() {
            return Err(VoxelizationError::NonFiniteInput);
        }

        *cell = snap(*e)
            .to_i32()
            .ok_or(VoxelizationError::CoordinateOutOfRange(*e))?;
    }

    Ok(result)
}
