//! Shapes that can be converted into voxels.

pub use self::ball::Ball;
pub use self::convex_polyhedron::ConvexPolyhedron;
pub use self::half_space::HalfSpace;
pub use self::line::Line;
pub use self::oriented_cube::OrientedCube;
pub use self::plane::{Disc, Plane, PlaneBoundary, PlaneFrame};
#[doc(inline)]
pub use self::shape::{ShapeType, VoxelShape};
pub use self::sphere_raster::SphereRaster;
pub use self::tetrahedron::Tetrahedron;
pub use self::tube::Tube;

use crate::math::Real;
use crate::transformation::voxelization::VoxelizationError;

mod ball;
mod convex_polyhedron;
mod half_space;
mod line;
mod oriented_cube;
mod plane;
mod shape;
mod sphere_raster;
mod tetrahedron;
mod tube;

/// Checks that `inner` and `outer` are the radii of a non-empty shell.
///
/// A zero `outer` size is accepted: it describes an empty shape.
fn validate_shell(inner: Real, outer: Real) -> Result<(), VoxelizationError> {
    if outer < 0.0 {
        return Err(VoxelizationError::NegativeExtent(outer));
    }

    if inner < 0.0 {
        return Err(VoxelizationError::NegativeExtent(inner));
    }

    if outer > 0.0 && inner >= outer {
        return Err(VoxelizationError::InvalidShell { inner, outer });
    }

    Ok(())
}

/// Checks that a polyhedron cavity scale factor lies in `[0, 1)`.
fn validate_inner_offset(factor: Real) -> Result<(), VoxelizationError> {
    if factor < 0.0 || factor >= 1.0 {
        Err(VoxelizationError::InvalidInnerOffset(factor))
    } else {
        Ok(())
    }
}
