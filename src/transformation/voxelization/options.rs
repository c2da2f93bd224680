use crate::math::Real;

/// Parameters controlling the conversion of shapes into voxels.
///
/// ```
/// use voxelgeom3d::transformation::voxelization::VoxelizationOptions;
///
/// let options = VoxelizationOptions {
///     unbounded_plane_extent: 10.0,
///     max_cells: Some(1_000_000),
///     ..Default::default()
/// };
/// assert_eq!(options.face_tolerance, 1.0e-6);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelizationOptions {
    /// Half-size of the region covered by a plane that has neither a rectangular nor a finite
    /// circular boundary. Such planes are clipped to this extent (with a warning).
    pub unbounded_plane_extent: Real,
    /// Distance tolerance of the half-space tests of oriented cubes and tetrahedra: a cell
    /// center at most this far outside of a face is still considered inside.
    pub face_tolerance: Real,
    /// Maximum number of cells a shape's bounding box may cover. `None` means unlimited.
    pub max_cells: Option<u64>,
}

impl Default for VoxelizationOptions {
    fn default() -> Self {
        Self {
            unbounded_plane_extent: 75.0,
            face_tolerance: 1.0e-6,
            max_cells: None,
        }
    }
}
