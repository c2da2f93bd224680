use crate::bounding_volume::CellRange;
use crate::math::{GridPoint, GridVector, Point, Real};
use core::ops::Add;

/// A voxel, i.e., a unit cell of the integer grid.
///
/// The voxel with coordinates `(x, y, z)` occupies `[x, x + 1) × [y, y + 1) × [z, z + 1)`.
/// Voxels are ordered lexicographically on `(x, y, z)`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Voxel {
    /// The `x` coordinate of this voxel.
    pub x: i32,
    /// The `y` coordinate of this voxel.
    pub y: i32,
    /// The `z` coordinate of this voxel.
    pub z: i32,
}

impl Voxel {
    /// Creates the voxel with the given integer coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The integer coordinates of this voxel.
    #[inline]
    pub fn coords(&self) -> GridPoint {
        GridPoint::new(self.x, self.y, self.z)
    }

    /// The world-space sample point of this voxel: the center of its cell.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::new(
            self.x as Real + 0.5,
            self.y as Real + 0.5,
            self.z as Real + 0.5,
        )
    }
}

impl From<GridPoint> for Voxel {
    #[inline]
    fn from(pt: GridPoint) -> Self {
        Self::new(pt.x, pt.y, pt.z)
    }
}

impl From<[i32; 3]> for Voxel {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Voxel> for [i32; 3] {
    #[inline]
    fn from(voxel: Voxel) -> Self {
        [voxel.x, voxel.y, voxel.z]
    }
}

impl Add<GridVector> for Voxel {
    type Output = Voxel;

    #[inline]
    fn add(self, rhs: GridVector) -> Voxel {
        Voxel::new(
            self.x.wrapping_add(rhs.x),
            self.y.wrapping_add(rhs.y),
            self.z.wrapping_add(rhs.z),
        )
    }
}

/// A set of voxels, stored as a sorted sequence without duplicates.
///
/// Every voxelization returns a `VoxelSet`. Iterating through it always yields the voxels
/// in ascending lexicographic order.
///
/// ```
/// use voxelgeom3d::transformation::voxelization::{Voxel, VoxelSet};
///
/// let set: VoxelSet = [[1, 0, 0], [0, 0, 1], [1, 0, 0]]
///     .into_iter()
///     .map(Voxel::from)
///     .collect();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.as_slice(), &[Voxel::new(0, 0, 1), Voxel::new(1, 0, 0)]);
/// ```
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(from = "Vec<Voxel>", into = "Vec<Voxel>")
)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VoxelSet {
    voxels: Vec<Voxel>,
}

impl VoxelSet {
    /// Creates an empty set of voxels.
    pub fn new() -> Self {
        Self { voxels: Vec::new() }
    }

    /// Builds a set from voxels already sorted in strictly ascending order.
    pub(crate) fn from_sorted(voxels: Vec<Voxel>) -> Self {
        debug_assert!(
            voxels.windows(2).all(|w| w[0] < w[1]),
            "The voxels must be sorted without duplicates."
        );
        Self { voxels }
    }

    /// The number of voxels in this set.
    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Does this set contain no voxel?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// The voxels of this set, in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[Voxel] {
        &self.voxels
    }

    /// Iterates through the voxels of this set, in ascending order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    /// Does this set contain the given voxel?
    #[inline]
    pub fn contains(&self, voxel: &Voxel) -> bool {
        self.voxels.binary_search(voxel).is_ok()
    }

    /// Does this set contain every voxel of `other`?
    pub fn is_superset(&self, other: &VoxelSet) -> bool {
        other.len() <= self.len() && other.iter().all(|v| self.contains(v))
    }

    /// The voxels contained in `self`, `other`, or both.
    pub fn union(&self, other: &VoxelSet) -> VoxelSet {
        let mut result = Vec::with_capacity(self.len().max(other.len()));
        let (mut a, mut b) = (self.voxels.iter().peekable(), other.voxels.iter().peekable());

        loop {
            let next = match (a.peek(), b.peek()) {
                (Some(va), Some(vb)) if va < vb => a.next(),
                (Some(va), Some(vb)) if vb < va => b.next(),
                (Some(_), Some(_)) => {
                    let _ = b.next();
                    a.next()
                }
                (Some(_), None) => a.next(),
                (None, Some(_)) => b.next(),
                (None, None) => break,
            };
            result.extend(next.copied());
        }

        VoxelSet::from_sorted(result)
    }

    /// The voxels contained in `self` but not in `other`.
    pub fn difference(&self, other: &VoxelSet) -> VoxelSet {
        let voxels = self
            .voxels
            .iter()
            .filter(|v| !other.contains(v))
            .copied()
            .collect();
        VoxelSet::from_sorted(voxels)
    }

    /// The smallest inclusive range of cells containing every voxel of this set.
    ///
    /// Returns `None` if this set is empty.
    pub fn bounds(&self) -> Option<CellRange> {
        let first = self.voxels.first()?.coords();
        let range = self
            .voxels
            .iter()
            .fold(CellRange::new(first, first), |mut range, voxel| {
                range.mins.x = range.mins.x.min(voxel.x);
                range.mins.y = range.mins.y.min(voxel.y);
                range.mins.z = range.mins.z.min(voxel.z);
                range.maxs.x = range.maxs.x.max(voxel.x);
                range.maxs.y = range.maxs.y.max(voxel.y);
                range.maxs.z = range.maxs.z.max(voxel.z);
                range
            });
        Some(range)
    }

    /// Pairs each voxel of this set, in ascending order, with the given material.
    ///
    /// This is the stream of `(voxel, material)` pairs expected by block-placement consumers.
    pub fn with_material<'a, M: Clone + 'a>(
        &'a self,
        material: M,
    ) -> impl Iterator<Item = (Voxel, M)> + 'a {
        self.voxels.iter().map(move |v| (*v, material.clone()))
    }

    /// Converts this set into the sorted vector of its voxels.
    #[inline]
    pub fn into_vec(self) -> Vec<Voxel> {
        self.voxels
    }
}

impl FromIterator<Voxel> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = Voxel>>(iter: I) -> Self {
        let mut voxels: Vec<_> = iter.into_iter().collect();
        voxels.sort_unstable();
        voxels.dedup();
        Self { voxels }
    }
}

impl From<Vec<Voxel>> for VoxelSet {
    fn from(voxels: Vec<Voxel>) -> Self {
        voxels.into_iter().collect()
    }
}

impl From<VoxelSet> for Vec<Voxel> {
    fn from(set: VoxelSet) -> Self {
        set.voxels
    }
}

impl IntoIterator for VoxelSet {
    type Item = Voxel;
    type IntoIter = std::vec::IntoIter<Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.into_iter()
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = core::slice::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}
