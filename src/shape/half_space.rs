//! Half-spaces delimiting convex polyhedra.
use crate::math::{Point, Real, UnitVector};
use crate::utils;

/// A half-space delimited by an infinite plane.
///
/// The half-space contains the points `p` such that `normal · p + bias <= 0`, i.e., the
/// points on the opposite side of its outward `normal`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HalfSpace {
    /// The halfspace planar boundary's outward normal.
    pub normal: UnitVector<Real>,
    /// The offset of the planar boundary along the normal, i.e., `-normal · p` for any point
    /// `p` of the boundary.
    pub bias: Real,
}

impl HalfSpace {
    /// Builds a new halfspace from its outward normal and a point of its planar boundary.
    #[inline]
    pub fn new(normal: UnitVector<Real>, point: &Point<Real>) -> HalfSpace {
        HalfSpace {
            normal,
            bias: -normal.dot(&point.coords),
        }
    }

    /// Builds the half-space bounded by the plane of the triangle `face` and containing the
    /// point `interior`.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn from_face(face: [&Point<Real>; 3], interior: &Point<Real>) -> Option<HalfSpace> {
        let normal = utils::ccw_face_normal(face)?;
        let normal = if normal.dot(&(interior - face[0])) > 0.0 {
            -normal
        } else {
            normal
        };

        Some(HalfSpace::new(normal, face[0]))
    }

    /// The signed distance from `pt` to the planar boundary: negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) + self.bias
    }

    /// Is `pt` inside of this half-space, or outside of it by at most `tolerance`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        self.signed_distance(pt) <= tolerance
    }
}
