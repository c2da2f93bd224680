use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::transformation::voxelization::VoxelizationError;
use crate::utils;

/// A solid or hollow tube around a segment, i.e., a capsule with an optional cavity.
///
/// A point belongs to the tube if its distance `d` to the segment `[p1, p2]` satisfies
/// `inner_thickness < d <= outer_thickness`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Tube {
    /// The first endpoint of the tube's axis.
    pub p1: Point<Real>,
    /// The second endpoint of the tube's axis.
    pub p2: Point<Real>,
    /// The radius of the tube.
    pub outer_thickness: Real,
    /// The radius of the tube's cavity. Zero for a solid tube.
    pub inner_thickness: Real,
}

impl Tube {
    /// Creates a solid tube of radius `thickness` around the segment `[p1, p2]`.
    #[inline]
    pub fn new(p1: Point<Real>, p2: Point<Real>, thickness: Real) -> Tube {
        Tube {
            p1,
            p2,
            outer_thickness: thickness,
            inner_thickness: 0.0,
        }
    }

    /// Hollows this tube with a cavity of radius `inner_thickness`.
    #[inline]
    pub fn with_inner_thickness(mut self, inner_thickness: Real) -> Tube {
        self.inner_thickness = inner_thickness;
        self
    }

    /// The length of the tube's axis.
    #[inline]
    pub fn length(&self) -> Real {
        na::distance(&self.p1, &self.p2)
    }

    /// Checks that the thicknesses of this tube describe a valid shell.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        if !self.p1.iter().chain(self.p2.iter()).all(|e| e.is_finite())
            || !self.outer_thickness.is_finite()
            || !self.inner_thickness.is_finite()
        {
            return Err(VoxelizationError::NonFiniteInput);
        }

        super::validate_shell(self.inner_thickness, self.outer_thickness)
    }

    /// Is the point `pt` part of this tube?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let closest = utils::closest_point_on_segment(pt, &self.p1, &self.p2);
        utils::is_in_shell(
            na::distance_squared(pt, &closest),
            self.inner_thickness,
            self.outer_thickness,
        )
    }

    /// The Aabb of this tube.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&[self.p1, self.p2]).loosened(self.outer_thickness.max(0.0))
    }
}
