use crate::transformation::voxelization::{DenseGrid, Voxel, VoxelSet};

/// A consumer of `(voxel, material)` pairs, e.g., a world that places one block at a time.
pub trait VoxelSink<M> {
    /// Sets the voxel `voxel` to `material`.
    fn set_voxel(&mut self, voxel: Voxel, material: M);
}

impl<M> VoxelSink<M> for Vec<(Voxel, M)> {
    #[inline]
    fn set_voxel(&mut self, voxel: Voxel, material: M) {
        self.push((voxel, material))
    }
}

impl<T: Copy + Default> VoxelSink<T> for DenseGrid<T> {
    /// Sets the cell of `voxel`, ignoring voxels outside of the grid.
    #[inline]
    fn set_voxel(&mut self, voxel: Voxel, material: T) {
        let _ = self.set(&voxel, material);
    }
}

/// Sends every voxel of `set` to `sink` with the given material.
///
/// The sink receives exactly one call per voxel, in ascending order. Returns the number of
/// voxels sent.
///
/// ```
/// use voxelgeom3d::math::Point;
/// use voxelgeom3d::shape::Line;
/// use voxelgeom3d::transformation::voxelization::{place_voxels, Voxel, Voxelize};
///
/// let line = Line::new(Point::origin(), Point::new(2.0, 0.0, 0.0)).voxelize();
/// let mut placed = Vec::new();
///
/// assert_eq!(place_voxels(&line, "oak_planks", &mut placed), 3);
/// assert_eq!(placed[2], (Voxel::new(2, 0, 0), "oak_planks"));
/// ```
pub fn place_voxels<M, S>(set: &VoxelSet, material: M, sink: &mut S) -> usize
where
    M: Clone,
    S: VoxelSink<M> + ?Sized,
{
    let mut count = 0;

    for (voxel, material) in set.with_material(material) {
        sink.set_voxel(voxel, material);
        count += 1;
    }

    log::debug!("Placed {} voxels.", count);
    count
}
