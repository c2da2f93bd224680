use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::ConvexPolyhedron;
use crate::transformation::voxelization::VoxelizationError;

/// A solid or hollow cube with an arbitrary orientation.
///
/// Hollow cubes are obtained by removing an inner cube, built by scaling the vertices toward
/// the center by `inner_offset_factor`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedCube {
    /// The center of the cube.
    pub center: Point<Real>,
    /// The length of each edge of the cube.
    pub side_length: Real,
    /// The orientation of the cube.
    pub rotation: Rotation<Real>,
    /// Scale factor of the cavity relative to the cube, in `[0, 1)`. Zero for a solid cube.
    pub inner_offset_factor: Real,
}

impl OrientedCube {
    /// The vertex indices of the three first corners of each face of the cube.
    ///
    /// The vertices are indexed as returned by [`OrientedCube::vertices`].
    pub const FACES_VERTEX_IDS: [[usize; 3]; 6] = [
        [0, 2, 3],
        [4, 5, 7],
        [0, 1, 5],
        [2, 6, 7],
        [0, 4, 6],
        [1, 3, 7],
    ];

    /// Creates a solid axis-aligned cube.
    #[inline]
    pub fn new(center: Point<Real>, side_length: Real) -> OrientedCube {
        OrientedCube {
            center,
            side_length,
            rotation: Rotation::identity(),
            inner_offset_factor: 0.0,
        }
    }

    /// Sets the orientation of this cube.
    #[inline]
    pub fn with_rotation(mut self, rotation: Rotation<Real>) -> OrientedCube {
        self.rotation = rotation;
        self
    }

    /// Hollows this cube with a cavity scaled by `inner_offset_factor`.
    #[inline]
    pub fn with_inner_offset_factor(mut self, inner_offset_factor: Real) -> OrientedCube {
        self.inner_offset_factor = inner_offset_factor;
        self
    }

    /// Does this cube have a cavity?
    #[inline]
    pub fn is_hollow(&self) -> bool {
        self.inner_offset_factor > 0.0
    }

    /// The 8 vertices of this cube.
    ///
    /// Vertex `i` is the rotated local corner whose `x`, `y` and `z` coordinates are positive
    /// iff the bits 0, 1 and 2 of `i` are set.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let h = self.side_length / 2.0;
        core::array::from_fn(|i| {
            let sign = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
            self.center + self.rotation * Vector::new(sign(0), sign(1), sign(2))
        })
    }

    /// The vertices of the cavity of this cube.
    pub fn inner_vertices(&self) -> [Point<Real>; 8] {
        self.vertices()
            .map(|v| self.center + (v - self.center) * self.inner_offset_factor)
    }

    /// Checks the size and cavity of this cube.
    pub fn validate(&self) -> Result<(), VoxelizationError> {
        if !self.center.iter().all(|e| e.is_finite())
            || !self.rotation.matrix().iter().all(|e| e.is_finite())
            || !self.side_length.is_finite()
            || !self.inner_offset_factor.is_finite()
        {
            return Err(VoxelizationError::NonFiniteInput);
        }

        if self.side_length <= 0.0 {
            return Err(VoxelizationError::InvalidSideLength(self.side_length));
        }

        super::validate_inner_offset(self.inner_offset_factor)
    }

    /// The boundary of this cube as an intersection of half-spaces.
    pub fn polyhedron(&self) -> ConvexPolyhedron {
        Self::polyhedron_from_vertices(&self.vertices(), &self.center)
    }

    /// The boundary of the cavity of this cube, if it is hollow.
    pub fn inner_polyhedron(&self) -> Option<ConvexPolyhedron> {
        self.is_hollow()
            .then(|| Self::polyhedron_from_vertices(&self.inner_vertices(), &self.center))
    }

    fn polyhedron_from_vertices(
        vertices: &[Point<Real>; 8],
        centroid: &Point<Real>,
    ) -> ConvexPolyhedron {
        let faces = Self::FACES_VERTEX_IDS
            .iter()
            .map(|[a, b, c]| [&vertices[*a], &vertices[*b], &vertices[*c]]);
        ConvexPolyhedron::from_faces(faces, centroid)
    }

    /// The Aabb of this cube.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices())
    }
}
