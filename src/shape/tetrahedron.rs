//! Definition of the tetrahedron shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::ConvexPolyhedron;
use crate::transformation::voxelization::VoxelizationError;
use crate::utils;

/// A solid or hollow tetrahedron.
///
/// Hollow tetrahedra are obtained by removing an inner tetrahedron, built by scaling the
/// vertices toward the centroid by `inner_offset_factor`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
    /// Scale factor of the cavity relative to the tetrahedron, in `[0, 1)`. Zero for a solid
    /// tetrahedron.
    pub inner_offset_factor: Real,
}

impl Tetrahedron {
    /// Creates a solid tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron {
            a,
            b,
            c,
            d,
            inner_offset_factor: 0.0,
        }
    }

    /// Creates a solid tetrahedron from a slice of exactly four points.
    pub fn try_from_slice(pts: &[Point<Real>]) -> Result<Tetrahedron, VoxelizationError> {
        match pts {
            [a, b, c, d] => Ok(Tetrahedron::new(*a, *b, *c, *d)),
            _ => Err(VoxelizationError::InvalidVertexCount(pts.len())),
        }
    }

    /// Hollows this tetrahedron with a cavity scaled by `inner_offset_factor`.
    #[inline]
    pub fn with_inner_offset_factor(mut self, inner_offset_factor: Real) -> Tetrahedron {
        self.inner_offset_factor = inner_offset_factor;
        self
    }

    /// Does this tetrahedron have a cavity?
    #[inline]
    pub fn is_hollow(&self) -> bool {
        self.inner_offset_factor > 0.0
    }

    /// The four vertices of this tetrahedron.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The centroid of this tetrahedron.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&self.vertices())
    }

    /// The vertices of the cavity of this tetrahedron.
    pub fn inner_vertices(&self) -> [Point<Real>; 4] {
        let centroid = self.center();
        self.vertices()
            .map(|v| centroid + (v - centroid) * self.inner_offset_factor)
    }

    /// Checks the vertices and cavity of this tetrahedron.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        if !self
            .vertices()
            .iter()
            .all(|pt| pt.iter().all(|e| e.is_finite()))
            || !self.inner_offset_factor.is_finite()
        {
            return Err(VoxelizationError::NonFiniteInput);
        }

        super::validate_inner_offset(self.inner_offset_factor)
    }

    /// The boundary of this tetrahedron as an intersection of half-spaces.
    pub fn polyhedron(&self) -> ConvexPolyhedron {
        Self::polyhedron_from_vertices(&self.vertices())
    }

    /// The boundary of the cavity of this tetrahedron, if it is hollow.
    pub fn inner_polyhedron(&self) -> Option<ConvexPolyhedron> {
        self.is_hollow()
            .then(|| Self::polyhedron_from_vertices(&self.inner_vertices()))
    }

    // Each face is oriented toward the vertex it doesn't contain.
    fn polyhedron_from_vertices(vtx: &[Point<Real>; 4]) -> ConvexPolyhedron {
        let mut poly = ConvexPolyhedron::default();
        let faces = [
            ([&vtx[0], &vtx[1], &vtx[2]], &vtx[3]),
            ([&vtx[0], &vtx[1], &vtx[3]], &vtx[2]),
            ([&vtx[0], &vtx[2], &vtx[3]], &vtx[1]),
            ([&vtx[1], &vtx[2], &vtx[3]], &vtx[0]),
        ];

        for (face, opposite) in faces {
            poly.push_face(face, opposite);
        }

        poly
    }

    /// The Aabb of this tetrahedron.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices())
    }
}
