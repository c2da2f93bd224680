use crate::math::{Point, Real};
use crate::shape::HalfSpace;
use arrayvec::ArrayVec;

/// The intersection of at most six half-spaces.
///
/// This is the common representation of oriented cubes and tetrahedra once their faces are
/// known: a point is inside if it is inside of every half-space.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ConvexPolyhedron {
    half_spaces: ArrayVec<HalfSpace, 6>,
}

impl ConvexPolyhedron {
    /// Builds the polyhedron bounded by the given triangular faces.
    ///
    /// Each face is oriented so that `interior` lies on its inner side. Degenerate faces are
    /// skipped.
    pub(crate) fn from_faces<'a>(
        faces: impl IntoIterator<Item = [&'a Point<Real>; 3]>,
        interior: &Point<Real>,
    ) -> Self {
        let mut result = Self::default();

        for face in faces {
            result.push_face(face, interior);
        }

        result
    }

    /// Adds the half-space bounded by `face` and containing `interior`.
    ///
    /// Degenerate faces are skipped.
    pub(crate) fn push_face(&mut self, face: [&Point<Real>; 3], interior: &Point<Real>) {
        match HalfSpace::from_face(face, interior) {
            Some(half_space) => self.half_spaces.push(half_space),
            None => log::debug!("Skipping degenerate face {:?}.", face),
        }
    }

    /// The half-spaces bounding this polyhedron.
    #[inline]
    pub fn half_spaces(&self) -> &[HalfSpace] {
        &self.half_spaces
    }

    /// Is `pt` inside of every face of this polyhedron, up to `tolerance`?
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, tolerance: Real) -> bool {
        self.half_spaces
            .iter()
            .all(|half_space| half_space.contains_point(pt, tolerance))
    }
}
