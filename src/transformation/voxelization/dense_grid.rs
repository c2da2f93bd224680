use crate::math::GridVector;
use crate::transformation::voxelization::{Voxel, VoxelSet};

/// A bounded, dense 3D array of cells.
///
/// The cell `(i, j, k)` is valid if `0 <= i < nx`, `0 <= j < ny` and `0 <= k < nz`. Cells
/// equal to `T::default()` are considered empty.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGrid<T> {
    dimensions: [usize; 3],
    data: Vec<T>,
}

impl<T: Copy + Default> DenseGrid<T> {
    /// Creates a grid of the given dimensions with all its cells empty.
    ///
    /// Returns `None` if the grid is too large to be addressed in memory.
    pub fn new(dimensions: [usize; 3]) -> Option<Self> {
        let len = dimensions[0]
            .checked_mul(dimensions[1])?
            .checked_mul(dimensions[2])?;

        if len.checked_mul(core::mem::size_of::<T>())? > isize::MAX as usize {
            return None;
        }

        Some(Self {
            dimensions,
            data: vec![T::default(); len],
        })
    }

    /// Creates a grid just large enough to contain all the voxels of `set`, set to `material`.
    ///
    /// The voxel with the smallest coordinates of the set's bounding box is placed at the
    /// cell `(0, 0, 0)`. Returns the grid together with the offset applied to the voxels
    /// of `set`, or `None` if the bounding box of `set` is too large for a dense grid.
    ///
    /// ```
    /// use voxelgeom3d::math::GridVector;
    /// use voxelgeom3d::transformation::voxelization::{DenseGrid, Voxel, VoxelSet};
    ///
    /// let set: VoxelSet = [Voxel::new(-1, 5, 0), Voxel::new(1, 5, 2)].into_iter().collect();
    /// let (grid, offset) = DenseGrid::from_voxels(&set, 7u8).unwrap();
    ///
    /// assert_eq!(offset, GridVector::new(1, -5, 0));
    /// assert_eq!(grid.dimensions(), [3, 1, 3]);
    /// assert_eq!(grid.get(2, 0, 2), Some(7));
    /// assert_eq!(grid.count_filled(), 2);
    /// ```
    pub fn from_voxels(set: &VoxelSet, material: T) -> Option<(Self, GridVector)> {
        let Some(bounds) = set.bounds() else {
            return Some((Self::new([0; 3])?, GridVector::zeros()));
        };

        let [nx, ny, nz] = bounds.dimensions().map(usize::try_from);
        let mut grid = Self::new([nx.ok()?, ny.ok()?, nz.ok()?])?;
        let offset = -bounds.mins.coords;
        let _ = grid.write_voxels(set, material, offset);

        Some((grid, offset))
    }

    /// The number of cells of this grid along each axis.
    #[inline]
    pub fn dimensions(&self) -> [usize; 3] {
        self.dimensions
    }

    fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.dimensions[0] + k * self.dimensions[0] * self.dimensions[1]
    }

    fn voxel_cell(&self, voxel: &Voxel) -> Option<usize> {
        let coord = |e: i32, n: usize| usize::try_from(e).ok().filter(|e| *e < n);
        Some(self.cell_index(
            coord(voxel.x, self.dimensions[0])?,
            coord(voxel.y, self.dimensions[1])?,
            coord(voxel.z, self.dimensions[2])?,
        ))
    }

    /// The value of the cell `(i, j, k)`, or `None` if it is out of bounds.
    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<T> {
        if i < self.dimensions[0] && j < self.dimensions[1] && k < self.dimensions[2] {
            Some(self.data[self.cell_index(i, j, k)])
        } else {
            None
        }
    }

    /// Sets the cell at the coordinates of `voxel` to `value`.
    ///
    /// Returns `false`, and leaves the grid unchanged, if the voxel is out of bounds.
    pub fn set(&mut self, voxel: &Voxel, value: T) -> bool {
        match self.voxel_cell(voxel) {
            Some(id) => {
                self.data[id] = value;
                true
            }
            None => false,
        }
    }

    /// Writes `material` into the cells of all the voxels of `set` translated by `offset`.
    ///
    /// Voxels falling outside of this grid are silently skipped. Returns the number of cells
    /// written.
    pub fn write_voxels(&mut self, set: &VoxelSet, material: T, offset: GridVector) -> usize {
        let mut written = 0;

        // Out-of-range sums map to -1, which is out of bounds.
        let shift = |e: i32, o: i32| i32::try_from(i64::from(e) + i64::from(o)).unwrap_or(-1);

        for voxel in set {
            let shifted = Voxel::new(
                shift(voxel.x, offset.x),
                shift(voxel.y, offset.y),
                shift(voxel.z, offset.z),
            );

            if self.set(&shifted, material) {
                written += 1;
            }
        }

        written
    }

    /// Iterates through the cells of this grid, with their coordinates.
    ///
    /// The first coordinate varies the fastest.
    pub fn iter(&self) -> impl Iterator<Item = ([usize; 3], T)> + '_ {
        let [nx, ny, _] = self.dimensions;
        self.data
            .iter()
            .enumerate()
            .map(move |(id, value)| ([id % nx, (id / nx) % ny, id / (nx * ny)], *value))
    }

    /// The number of non-empty cells of this grid.
    pub fn count_filled(&self) -> usize
    where
        T: PartialEq,
    {
        let empty = T::default();
        self.data.iter().filter(|value| **value != empty).count()
    }
}
