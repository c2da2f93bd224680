use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::{ConvexPolyhedron, OrientedCube, Tetrahedron};
use crate::transformation::voxelization::{
    scan_cells, VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};

/// Voxelizes the region inside of `outer` but not inside of `inner`.
fn voxelize_polyhedron(
    aabb: Aabb,
    outer: ConvexPolyhedron,
    inner: Option<ConvexPolyhedron>,
    options: &VoxelizationOptions,
) -> Result<VoxelSet, VoxelizationError> {
    let tolerance = options.face_tolerance;
    let in_cavity = |pt: &Point<Real>| {
        inner
            .as_ref()
            .is_some_and(|inner| inner.contains_point(pt, tolerance))
    };

    scan_cells(aabb.cells()?, options, |pt| {
        outer.contains_point(pt, tolerance) && !in_cavity(pt)
    })
}

impl Voxelize for OrientedCube {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        self.validate()?;
        voxelize_polyhedron(
            self.aabb(),
            self.polyhedron(),
            self.inner_polyhedron(),
            options,
        )
    }
}

impl Voxelize for Tetrahedron {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        self.validate()?;
        voxelize_polyhedron(
            self.aabb(),
            self.polyhedron(),
            self.inner_polyhedron(),
            options,
        )
    }
}

impl Tetrahedron {
    /// Voxelizes the tetrahedron with the given vertices.
    ///
    /// Returns an empty set, and logs an error, if `vertices` doesn't contain exactly four
    /// points or if the tetrahedron is invalid.
    pub fn voxelize_slice(
        vertices: &[Point<Real>],
        inner_offset_factor: Real,
        options: &VoxelizationOptions,
    ) -> VoxelSet {
        match Tetrahedron::try_from_slice(vertices) {
            Ok(tetra) => tetra
                .with_inner_offset_factor(inner_offset_factor)
                .voxelize_with(options),
            Err(err) => {
                err.log();
                VoxelSet::new()
            }
        }
    }
}
