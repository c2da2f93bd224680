use crate::math::{GridPoint, Real};
use crate::transformation::voxelization::VoxelizationError;

/// A digital sphere rasterized slice by slice with the midpoint circle algorithm.
///
/// Unlike [`Ball`](crate::shape::Ball), which tests the center of each cell, this samples
/// the integer lattice points around an integer center. For the same radius it yields a
/// noticeably larger solid (about 12% more voxels for a radius of 10).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct SphereRaster {
    /// The center of the sphere.
    pub center: GridPoint,
    /// The radius of the sphere.
    pub radius: i32,
    /// Are the slices filled, or is only the surface rasterized?
    pub solid: bool,
}

impl SphereRaster {
    /// The surface of a digital sphere.
    #[inline]
    pub fn surface(center: GridPoint, radius: i32) -> SphereRaster {
        SphereRaster {
            center,
            radius,
            solid: false,
        }
    }

    /// A solid digital sphere.
    #[inline]
    pub fn solid(center: GridPoint, radius: i32) -> SphereRaster {
        SphereRaster {
            center,
            radius,
            solid: true,
        }
    }

    /// Checks that the radius of this sphere is not negative.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        if self.radius < 0 {
            Err(VoxelizationError::NegativeExtent(self.radius as Real))
        } else {
            Ok(())
        }
    }
}
