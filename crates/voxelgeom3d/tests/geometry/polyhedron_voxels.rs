use voxelgeom3d::math::{Point, Real};
use voxelgeom3d::shape::{OrientedCube, Tetrahedron};
use voxelgeom3d::transformation::voxelization::{
    Voxel, VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};
use voxelgeom3d::utils::rotation_from_euler_degrees;

fn corner_tetrahedron(size: Real) -> Tetrahedron {
    Tetrahedron::new(
        Point::origin(),
        Point::new(size, 0.0, 0.0),
        Point::new(0.0, size, 0.0),
        Point::new(0.0, 0.0, size),
    )
}

#[test]
fn axis_aligned_cube() {
    let voxels = OrientedCube::new(Point::origin(), 4.0).voxelize();
    let expected: VoxelSet = (-2..2)
        .flat_map(|x| (-2..2).flat_map(move |y| (-2..2).map(move |z| Voxel::new(x, y, z))))
        .collect();

    assert_eq!(voxels.len(), 64);
    assert_eq!(voxels, expected);
}

#[test]
fn hollow_cube() {
    let cube = OrientedCube::new(Point::origin(), 10.0);
    let solid = cube.voxelize();
    let hollow = cube.with_inner_offset_factor(0.6).voxelize();

    assert_eq!(solid.len(), 1000);
    assert_eq!(hollow.len(), 784);
    assert!(solid.is_superset(&hollow));
    assert!(!hollow.contains(&Voxel::new(0, 0, 0)));
    assert!(hollow.contains(&Voxel::new(-5, -5, -5)));
}

#[test]
fn rotated_cube() {
    let cube = OrientedCube::new(Point::origin(), 6.0)
        .with_rotation(rotation_from_euler_degrees(45.0, 0.0, 0.0));
    let voxels = cube.voxelize();

    assert_eq!(voxels.len(), 240);
    assert!(voxels.contains(&Voxel::new(3, 0, 0)));
    assert!(!voxels.contains(&Voxel::new(2, 2, 0)));
}

#[test]
fn rotated_cube_keeps_its_volume() {
    let cube = OrientedCube::new(Point::new(0.3, 0.1, -0.2), 12.0)
        .with_rotation(rotation_from_euler_degrees(30.0, 20.0, 10.0));
    let num_voxels = cube.voxelize().len() as Real;

    assert_relative_eq!(num_voxels, 12.0 * 12.0 * 12.0, max_relative = 0.05);
}

#[test]
fn solid_tetrahedra() {
    assert_eq!(corner_tetrahedron(4.0).voxelize().len(), 10);
    assert_eq!(corner_tetrahedron(8.0).voxelize().len(), 84);
}

#[test]
fn hollow_tetrahedron() {
    let solid = corner_tetrahedron(8.0).voxelize();
    let hollow = corner_tetrahedron(8.0)
        .with_inner_offset_factor(0.5)
        .voxelize();

    assert_eq!(hollow.len(), 74);
    assert!(solid.is_superset(&hollow));
}

#[test]
fn tetrahedron_from_wrong_vertex_count() {
    let pts = [Point::origin(), Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0)];
    let options = VoxelizationOptions::default();

    assert!(Tetrahedron::voxelize_slice(&pts, 0.0, &options).is_empty());
    assert_eq!(
        Tetrahedron::try_from_slice(&pts),
        Err(VoxelizationError::InvalidVertexCount(3))
    );
    assert_eq!(
        Tetrahedron::voxelize_slice(&corner_tetrahedron(4.0).vertices(), 0.0, &options).len(),
        10
    );
}

#[test]
fn invalid_polyhedra() {
    assert_eq!(
        OrientedCube::new(Point::origin(), -2.0).try_voxelize(),
        Err(VoxelizationError::InvalidSideLength(-2.0))
    );
    assert_eq!(
        corner_tetrahedron(4.0)
            .with_inner_offset_factor(1.5)
            .try_voxelize(),
        Err(VoxelizationError::InvalidInnerOffset(1.5))
    );
}
