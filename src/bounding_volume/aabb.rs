//! Axis Aligned Bounding Box.

use crate::bounding_volume::CellRange;
use crate::math::{Point, Real, Vector};
use crate::transformation::voxelization::VoxelizationError;
use crate::utils;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Every shape computes the AABB of its region before voxelization: the integer cells
/// covering this box are the only candidates tested by the shape's inside/outside predicate.
///
/// # Example
///
/// ```
/// use voxelgeom3d::bounding_volume::Aabb;
/// use voxelgeom3d::math::{GridPoint, Point};
///
/// let aabb = Aabb::new(Point::new(-1.5, 0.0, 2.2), Point::new(1.5, 1.0, 3.0));
/// let cells = aabb.cells().unwrap();
///
/// assert_eq!(cells.mins, GridPoint::new(-2, 0, 2));
/// assert_eq!(cells.maxs, GridPoint::new(2, 1, 3));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new Aabb.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid `Aabb` with `mins` components set to `Real::max_values` and `maxs`
    /// components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some `Aabb` merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Computes the `Aabb` bounding the given set of points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Aabb::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Returns an `Aabb` enlarged by `amount` along every axis.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// The inclusive range of integer cells covering this `Aabb`.
    ///
    /// The range goes from `floor(mins)` to `ceil(maxs)` on each axis. Fails if a bound is
    /// not finite or if a cell coordinate doesn't fit in an `i32`.
    #[inline]
    pub fn cells(&self) -> Result<CellRange, VoxelizationError> {
        Ok(CellRange::new(
            utils::snap_to_grid(&self.mins, Real::floor)?,
            utils::snap_to_grid(&self.maxs, Real::ceil)?,
        ))
    }
}
