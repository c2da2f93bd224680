use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::transformation::voxelization::VoxelizationError;
use crate::utils;

/// A solid or hollow ball.
///
/// A point belongs to the ball if its distance `d` to the center satisfies
/// `inner_radius < d <= outer_radius`. An `inner_radius` of zero describes a solid ball, whose
/// exact center is still excluded by the strict inner bound.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub outer_radius: Real,
    /// The radius of the cavity of the ball. Zero for a solid ball.
    pub inner_radius: Real,
}

impl Ball {
    /// Creates a new solid ball.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        Ball {
            center,
            outer_radius: radius,
            inner_radius: 0.0,
        }
    }

    /// Hollows this ball with a cavity of the given radius.
    #[inline]
    pub fn with_inner_radius(mut self, inner_radius: Real) -> Ball {
        self.inner_radius = inner_radius;
        self
    }

    /// Does this ball have a cavity?
    #[inline]
    pub fn is_hollow(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// Checks that the radii of this ball describe a valid shell.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        if !self.center.iter().all(|e| e.is_finite())
            || !self.outer_radius.is_finite()
            || !self.inner_radius.is_finite()
        {
            return Err(VoxelizationError::NonFiniteInput);
        }

        super::validate_shell(self.inner_radius, self.outer_radius)
    }

    /// Is the point `pt` part of this ball?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        utils::is_in_shell(
            na::distance_squared(pt, &self.center),
            self.inner_radius,
            self.outer_radius,
        )
    }

    /// The Aabb of this ball.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        let half_extents = Vector::repeat(self.outer_radius);
        Aabb::new(self.center - half_extents, self.center + half_extents)
    }
}
