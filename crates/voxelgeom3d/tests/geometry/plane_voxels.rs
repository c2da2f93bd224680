use voxelgeom3d::math::{Point, Vector};
use voxelgeom3d::shape::{Disc, Plane};
use voxelgeom3d::transformation::voxelization::{
    Voxel, Voxelize, VoxelizationError, VoxelizationOptions,
};

#[test]
fn rectangular_plane() {
    let plane = Plane::new(Vector::z(), Point::new(0.5, 0.5, 0.5)).with_rect(10.0, 10.0);
    let voxels = plane.voxelize();

    assert_eq!(voxels.len(), 121);
    assert!(voxels.iter().all(|v| v.z == 0));
    assert!(voxels.contains(&Voxel::new(-5, 5, 0)));
    assert!(!voxels.contains(&Voxel::new(6, 0, 0)));
}

#[test]
fn rectangular_plane_with_hole() {
    let plane = Plane::new(Vector::z(), Point::new(0.5, 0.5, 0.5))
        .with_rect(10.0, 10.0)
        .with_inner_rect(4.0, 4.0);
    let voxels = plane.voxelize();

    assert_eq!(voxels.len(), 96);
    assert!(!voxels.contains(&Voxel::new(0, 0, 0)));
    assert!(voxels.contains(&Voxel::new(3, 0, 0)));
}

#[test]
fn unbounded_plane_is_clipped() {
    let plane = Plane::new(Vector::z(), Point::origin());
    let options = VoxelizationOptions {
        unbounded_plane_extent: 10.0,
        ..Default::default()
    };
    let voxels = plane.voxelize_with(&options);

    // Two layers of 23 × 23 cells, both at a distance of 0.5 from the plane.
    assert_eq!(voxels.len(), 2 * 23 * 23);
    assert!(voxels.iter().all(|v| v.z == -1 || v.z == 0));
}

#[test]
fn unbounded_plane_default_extent() {
    let voxels = Plane::new(Vector::z(), Point::origin()).voxelize();
    assert_eq!(voxels.len(), 2 * 153 * 153);
}

#[test]
fn zero_normal_gives_empty_set() {
    let plane = Plane::new(Vector::zeros(), Point::origin()).with_rect(4.0, 4.0);

    assert!(plane.voxelize().is_empty());
    assert_eq!(plane.try_voxelize(), Err(VoxelizationError::DegenerateNormal));
}

#[test]
fn discs_and_annuli() {
    let center = Point::new(0.5, 0.5, 0.5);
    let disc = Disc::new(center, Vector::z(), 3.0).voxelize();
    let annulus = Disc::new(center, Vector::z(), 3.0)
        .with_inner_radius(1.0)
        .voxelize();

    assert_eq!(disc.len(), 28);
    assert_eq!(annulus.len(), 24);
    assert_eq!(disc.difference(&annulus).len(), 4);

    for voxel in &annulus {
        let d2 = na::distance_squared(&voxel.center(), &center);
        assert!(1.0 < d2 && d2 <= 9.0);
    }
}

#[test]
fn disc_centered_on_a_cell_excludes_it() {
    let disc = Disc::new(Point::new(0.5, 0.5, 0.5), Vector::z(), 2.0).voxelize();

    assert!(!disc.contains(&Voxel::new(0, 0, 0)));
    assert!(disc.contains(&Voxel::new(1, 0, 0)));
    assert!(disc.contains(&Voxel::new(1, 1, 0)));
    assert!(disc.contains(&Voxel::new(0, -2, 0)));
    assert_eq!(disc.len(), 12);
}

#[test]
fn oblique_plane_cells_are_close_to_the_plane() {
    let normal = Vector::new(1.0, 2.0, -0.5);
    let point = Point::new(3.0, -1.0, 2.0);
    let plane = Plane::new(normal, point).with_thickness(2.0).with_radius(6.0);
    let unit_normal = normal.normalize();
    let voxels = plane.voxelize();

    assert!(!voxels.is_empty());
    for voxel in &voxels {
        let offset = voxel.center() - point;
        let dist = offset.dot(&unit_normal);
        let in_plane = offset - unit_normal * dist;

        assert!(dist.abs() <= 1.0 + 1.0e-9);
        assert!(in_plane.norm() <= 6.0 + 1.0e-9);
    }
}
