use crate::math::Real;

/// Errors that can occur while converting a shape into a set of voxels.
///
/// The infallible [`Voxelize::voxelize`](crate::transformation::voxelization::Voxelize::voxelize)
/// never returns these errors: it logs them and yields an empty
/// [`VoxelSet`](crate::transformation::voxelization::VoxelSet) instead. Use
/// [`Voxelize::try_voxelize`](crate::transformation::voxelization::Voxelize::try_voxelize) to
/// handle them explicitly.
///
/// ```
/// use voxelgeom3d::math::Point;
/// use voxelgeom3d::shape::Ball;
/// use voxelgeom3d::transformation::voxelization::{Voxelize, VoxelizationError};
///
/// let ball = Ball::new(Point::origin(), 2.0).with_inner_radius(3.0);
///
/// assert_eq!(
///     ball.try_voxelize(),
///     Err(VoxelizationError::InvalidShell { inner: 3.0, outer: 2.0 })
/// );
/// assert!(ball.voxelize().is_empty());
/// ```
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum VoxelizationError {
    /// The inner radius or thickness of a shell is not smaller than its outer one.
    ///
    /// Shells keep the points strictly farther than `inner` and not farther than `outer`,
    /// so `inner >= outer` would always produce an empty set.
    #[error("The inner size {inner} of the shell must be smaller than its outer size {outer}.")]
    InvalidShell {
        /// The inner radius or thickness.
        inner: Real,
        /// The outer radius or thickness.
        outer: Real,
    },

    /// A radius, thickness or extent is negative.
    #[error("Expected a non-negative size, got {0}.")]
    NegativeExtent(Real),

    /// A coordinate or size given to the shape is NaN or infinite.
    #[error("The shape parameters contain non-finite values.")]
    NonFiniteInput,

    /// A coordinate of the shape, or of its bounding box, lies outside of the `i32` grid.
    #[error("The coordinate {0} lies outside of the voxel grid.")]
    CoordinateOutOfRange(Real),

    /// The normal of a plane or disc has a zero length.
    #[error("The normal vector has a zero length.")]
    DegenerateNormal,

    /// A tetrahedron was given a number of vertices other than 4.
    #[error("A tetrahedron needs exactly 4 vertices, got {0}.")]
    InvalidVertexCount(usize),

    /// The inner offset factor of a hollow polyhedron is outside of `[0, 1)`.
    #[error("The inner offset factor must be in [0, 1), got {0}.")]
    InvalidInnerOffset(Real),

    /// The side length of a cube is not strictly positive.
    #[error("The side length of a cube must be positive, got {0}.")]
    InvalidSideLength(Real),

    /// The bounding box of the shape covers more cells than allowed by
    /// [`VoxelizationOptions::max_cells`](crate::transformation::voxelization::VoxelizationOptions::max_cells).
    #[error("The shape covers {cells} cells, more than the maximum of {max}.")]
    TooManyCells {
        /// The number of cells of the shape's bounding box.
        cells: u64,
        /// The configured maximum number of cells.
        max: u64,
    },
}

impl VoxelizationError {
    /// Reports this error through the `log` facade.
    ///
    /// Malformed inputs (degenerate normals, wrong vertex counts, non-finite or off-grid
    /// values) are reported as errors. Inconsistent but well-formed sizes are reported as
    /// warnings.
    pub fn log(&self) {
        match self {
            Self::DegenerateNormal
            | Self::InvalidVertexCount(_)
            | Self::NonFiniteInput
            | Self::CoordinateOutOfRange(_) => log::error!("Voxelization failed: {}", self),
            _ => log::warn!("Voxelization produced no voxels: {}", self),
        }
    }
}
