//! Inclusive ranges of integer cells.

use crate::math::GridPoint;

/// An inclusive box of integer cells.
///
/// Cells are enumerated in ascending lexicographic order of their `(x, y, z)` coordinates,
/// i.e., `z` varies the fastest.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct CellRange {
    /// The cell with the smallest coordinates.
    pub mins: GridPoint,
    /// The cell with the largest coordinates (inclusive).
    pub maxs: GridPoint,
}

impl CellRange {
    /// Creates the inclusive range of cells between `mins` and `maxs`.
    #[inline]
    pub fn new(mins: GridPoint, maxs: GridPoint) -> Self {
        Self { mins, maxs }
    }

    /// Is this range free of any cell?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x || self.mins.y > self.maxs.y || self.mins.z > self.maxs.z
    }

    /// The number of cells of this range along each axis.
    pub fn dimensions(&self) -> [u64; 3] {
        let len = |min: i32, max: i32| (i64::from(max) - i64::from(min) + 1).max(0) as u64;
        [
            len(self.mins.x, self.maxs.x),
            len(self.mins.y, self.maxs.y),
            len(self.mins.z, self.maxs.z),
        ]
    }

    /// The total number of cells of this range, saturating at `u64::MAX`.
    pub fn num_cells(&self) -> u64 {
        let [nx, ny, nz] = self.dimensions();
        nx.saturating_mul(ny).saturating_mul(nz)
    }

    /// Does this range contain the cell `cell`?
    #[inline]
    pub fn contains(&self, cell: &GridPoint) -> bool {
        (0..3).all(|i| self.mins[i] <= cell[i] && cell[i] <= self.maxs[i])
    }

    /// Iterates through all the cells of this range in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = GridPoint> {
        let range = *self;
        (range.mins.x..=range.maxs.x).flat_map(move |x| range.slice_x(x))
    }

    /// Iterates through the cells of this range with the `x` coordinate `x`, in lexicographic
    /// order.
    pub fn slice_x(&self, x: i32) -> impl Iterator<Item = GridPoint> {
        let (mins, maxs) = (self.mins, self.maxs);
        (mins.y..=maxs.y)
            .flat_map(move |y| (mins.z..=maxs.z).map(move |z| GridPoint::new(x, y, z)))
    }
}
