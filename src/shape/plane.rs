use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, UnitVector, Vector, Vector2, DEGENERACY_EPSILON};
use crate::transformation::voxelization::VoxelizationError;
use crate::utils;

/// The kind of boundary limiting the extent of a [`Plane`] inside of its own plane.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum PlaneBoundary {
    /// A rectangle, optionally with a rectangular hole.
    Rectangle,
    /// A circle, optionally with a circular hole.
    Circle,
    /// No boundary: the plane is clipped by the voxelization options.
    Unbounded,
}

/// A thick plane, optionally bounded by a rectangle or a circle.
///
/// A point belongs to the plane if its distance to the plane is at most `thickness / 2` and
/// its projection onto the plane lies inside of the boundary. The rectangular boundary takes
/// precedence over the circular one when both are set.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Plane {
    /// The normal of the plane. It doesn't need to be normalized but must not be zero.
    pub normal: Vector<Real>,
    /// A point of the plane. Circular boundaries are centered on this point.
    pub point_on_plane: Point<Real>,
    /// The thickness of the plane, measured along its normal.
    pub thickness: Real,
    /// The `(width, height)` of the rectangular boundary, along the plane's basis vectors.
    pub outer_rect: Option<Vector2<Real>>,
    /// The `(width, height)` of the rectangular hole.
    pub inner_rect: Option<Vector2<Real>>,
    /// The offset from `point_on_plane` to the center of the rectangular boundary.
    pub rect_center_offset: Vector<Real>,
    /// The radius of the circular boundary. Infinite if there is no circular boundary.
    pub outer_radius: Real,
    /// The radius of the circular hole. Zero if there is no hole.
    pub inner_radius: Real,
}

/// The orthonormal frame of a non-degenerate [`Plane`].
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PlaneFrame {
    /// The unit normal of the plane.
    pub normal: UnitVector<Real>,
    /// The offset of the plane along its normal: `-normal · point_on_plane`.
    pub bias: Real,
    /// The first in-plane basis vector, measuring the widths of rectangular boundaries.
    pub u: Vector<Real>,
    /// The second in-plane basis vector, measuring the heights of rectangular boundaries.
    pub v: Vector<Real>,
}

impl Plane {
    /// Creates an unbounded plane with a thickness of 1.
    pub fn new(normal: Vector<Real>, point_on_plane: Point<Real>) -> Plane {
        Plane {
            normal,
            point_on_plane,
            thickness: 1.0,
            outer_rect: None,
            inner_rect: None,
            rect_center_offset: Vector::zeros(),
            outer_radius: Real::INFINITY,
            inner_radius: 0.0,
        }
    }

    /// Sets the thickness of this plane.
    pub fn with_thickness(mut self, thickness: Real) -> Plane {
        self.thickness = thickness;
        self
    }

    /// Bounds this plane by a `width × height` rectangle.
    pub fn with_rect(mut self, width: Real, height: Real) -> Plane {
        self.outer_rect = Some(Vector2::new(width, height));
        self
    }

    /// Removes a `width × height` rectangle from the rectangular boundary of this plane.
    pub fn with_inner_rect(mut self, width: Real, height: Real) -> Plane {
        self.inner_rect = Some(Vector2::new(width, height));
        self
    }

    /// Moves the center of the rectangular boundary away from `point_on_plane`.
    pub fn with_rect_center_offset(mut self, offset: Vector<Real>) -> Plane {
        self.rect_center_offset = offset;
        self
    }

    /// Bounds this plane by a circle centered on `point_on_plane`.
    pub fn with_radius(mut self, radius: Real) -> Plane {
        self.outer_radius = radius;
        self
    }

    /// Removes a circle centered on `point_on_plane` from this plane.
    pub fn with_inner_radius(mut self, radius: Real) -> Plane {
        self.inner_radius = radius;
        self
    }

    /// The kind of boundary of this plane.
    pub fn boundary(&self) -> PlaneBoundary {
        if self.outer_rect.is_some() {
            PlaneBoundary::Rectangle
        } else if self.outer_radius.is_finite() || self.inner_radius > 0.0 {
            PlaneBoundary::Circle
        } else {
            PlaneBoundary::Unbounded
        }
    }

    /// The orthonormal frame of this plane, or `None` if its normal is zero.
    pub fn frame(&self) -> Option<PlaneFrame> {
        let normal = UnitVector::try_new(self.normal, DEGENERACY_EPSILON)?;
        let (u, v) = utils::plane_basis(&normal);

        Some(PlaneFrame {
            normal,
            bias: -normal.dot(&self.point_on_plane.coords),
            u,
            v,
        })
    }

    /// The radius around `point_on_plane` covering the boundary of this plane.
    ///
    /// This is the largest of the rectangle's half-diagonal (shifted by its center offset)
    /// and the finite circle radius. Returns `None` if the plane has no finite extent.
    pub fn extent(&self) -> Option<Real> {
        let rect_extent = self
            .outer_rect
            .map(|rect| (rect / 2.0).norm() + self.rect_center_offset.norm());
        let circle_extent = Some(self.outer_radius).filter(|r| r.is_finite());

        match (rect_extent, circle_extent) {
            (Some(r1), Some(r2)) => Some(r1.max(r2)),
            (r1, r2) => r1.or(r2),
        }
    }

    /// Checks the parameters of this plane.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        let finite_vectors = self
            .normal
            .iter()
            .chain(self.point_on_plane.iter())
            .chain(self.rect_center_offset.iter())
            .chain(self.outer_rect.iter().flat_map(|r| r.iter()))
            .chain(self.inner_rect.iter().flat_map(|r| r.iter()))
            .all(|e| e.is_finite());

        if !finite_vectors
            || !self.thickness.is_finite()
            || !self.inner_radius.is_finite()
            || self.outer_radius.is_nan()
        {
            return Err(VoxelizationError::NonFiniteInput);
        }

        if self.normal.norm() < DEGENERACY_EPSILON {
            return Err(VoxelizationError::DegenerateNormal);
        }

        if self.thickness < 0.0 {
            return Err(VoxelizationError::NegativeExtent(self.thickness));
        }

        for size in self.outer_rect.iter().chain(self.inner_rect.iter()) {
            if size.x < 0.0 || size.y < 0.0 {
                return Err(VoxelizationError::NegativeExtent(size.x.min(size.y)));
            }
        }

        if self.boundary() == PlaneBoundary::Circle {
            super::validate_shell(self.inner_radius, self.outer_radius)?;
        }

        Ok(())
    }

    /// Is the point `pt` part of this plane?
    ///
    /// The `frame` must be the one returned by [`Plane::frame`].
    pub fn contains_point(&self, frame: &PlaneFrame, pt: &Point<Real>) -> bool {
        let dist = frame.normal.dot(&pt.coords) + frame.bias;

        if dist.abs() > self.thickness / 2.0 {
            return false;
        }

        let projected = pt - *frame.normal * dist;

        match self.boundary() {
            PlaneBoundary::Rectangle => {
                let local = projected - (self.point_on_plane + self.rect_center_offset);
                let (lu, lv) = (local.dot(&frame.u).abs(), local.dot(&frame.v).abs());
                let inside_rect =
                    |rect: &Vector2<Real>| lu <= rect.x / 2.0 && lv <= rect.y / 2.0;

                self.outer_rect.as_ref().is_some_and(inside_rect)
                    && !self.inner_rect.as_ref().is_some_and(inside_rect)
            }
            PlaneBoundary::Circle => utils::is_in_shell(
                na::distance_squared(&projected, &self.point_on_plane),
                self.inner_radius,
                self.outer_radius,
            ),
            PlaneBoundary::Unbounded => true,
        }
    }

    /// The Aabb of the region of this plane that is voxelized.
    ///
    /// Planes without a finite extent are clipped to `unbounded_extent` around
    /// `point_on_plane`.
    pub fn aabb(&self, unbounded_extent: Real) -> Aabb {
        let extent = self.extent().unwrap_or(unbounded_extent);
        Aabb::from_points(&[self.point_on_plane]).loosened((extent + self.thickness).max(0.0))
    }
}

/// A thick disc, i.e., a plane bounded by a circle centered on the disc's center.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Disc {
    /// The normal of the disc. It doesn't need to be normalized but must not be zero.
    pub normal: Vector<Real>,
    /// The center of the disc.
    pub center: Point<Real>,
    /// The thickness of the disc, measured along its normal.
    pub thickness: Real,
    /// The radius of the disc.
    pub outer_radius: Real,
    /// The radius of the hole at the center of the disc. Zero for a full disc.
    pub inner_radius: Real,
}

impl Disc {
    /// Creates a full disc with a thickness of 1.
    pub fn new(center: Point<Real>, normal: Vector<Real>, radius: Real) -> Disc {
        Disc {
            normal,
            center,
            thickness: 1.0,
            outer_radius: radius,
            inner_radius: 0.0,
        }
    }

    /// Sets the thickness of this disc.
    pub fn with_thickness(mut self, thickness: Real) -> Disc {
        self.thickness = thickness;
        self
    }

    /// Turns this disc into an annulus with a hole of the given radius.
    pub fn with_inner_radius(mut self, inner_radius: Real) -> Disc {
        self.inner_radius = inner_radius;
        self
    }

    /// The plane with a circular boundary equivalent to this disc.
    pub fn to_plane(&self) -> Plane {
        Plane::new(self.normal, self.center)
            .with_thickness(self.thickness)
            .with_radius(self.outer_radius)
            .with_inner_radius(self.inner_radius)
    }
}
