use voxelgeom3d::math::Point;
use voxelgeom3d::shape::{Ball, Tube};
use voxelgeom3d::transformation::voxelization::{Voxel, Voxelize, VoxelizationError};
use voxelgeom3d::utils::distance_point_to_segment;

#[test]
fn solid_and_hollow_tubes() {
    let p1 = Point::new(0.5, 0.5, 0.5);
    let p2 = Point::new(10.5, 0.5, 0.5);
    let solid = Tube::new(p1, p2, 1.0).voxelize();
    let hollow = Tube::new(p1, p2, 1.0)
        .with_inner_thickness(0.5)
        .voxelize();

    // The cells on the axis are at distance zero: even the solid tube leaves them out.
    assert_eq!(solid.len(), 46);
    assert_eq!(hollow, solid);

    for voxel in &hollow {
        let dist = distance_point_to_segment(&voxel.center(), &p1, &p2);
        assert!(0.5 < dist && dist <= 1.0);
    }
}

#[test]
fn tube_axis_cells_are_excluded() {
    let tube = Tube::new(Point::new(0.5, 0.5, 0.5), Point::new(3.5, 0.5, 0.5), 1.0);
    let voxels = tube.voxelize();

    for x in 0..=3 {
        assert!(!voxels.contains(&Voxel::new(x, 0, 0)));
        assert!(voxels.contains(&Voxel::new(x, 1, 0)));
        assert!(voxels.contains(&Voxel::new(x, 0, -1)));
    }
    assert!(voxels.contains(&Voxel::new(-1, 0, 0)));
    assert!(voxels.contains(&Voxel::new(4, 0, 0)));
    assert_eq!(voxels.len(), 4 * 4 + 2);
}

#[test]
fn degenerate_tube_matches_ball() {
    let center = Point::origin();

    assert_eq!(
        Tube::new(center, center, 2.0).voxelize(),
        Ball::new(center, 2.0).voxelize()
    );
}

#[test]
fn random_tubes_respect_their_shell() {
    let mut rng = oorandom::Rand64::new(7);
    let mut random_point = || {
        Point::new(
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
            rng.rand_float() * 10.0,
        )
    };

    for _ in 0..10 {
        let (p1, p2) = (random_point(), random_point());
        let tube = Tube::new(p1, p2, 2.5).with_inner_thickness(1.0);
        let voxels = tube.voxelize();

        assert!(!voxels.is_empty());
        for voxel in &voxels {
            let dist = distance_point_to_segment(&voxel.center(), &p1, &p2);
            assert!(1.0 < dist && dist <= 2.5);
        }
    }
}

#[test]
fn invalid_tubes() {
    let tube = Tube::new(Point::origin(), Point::new(1.0, 0.0, 0.0), 1.0);

    assert_eq!(
        tube.with_inner_thickness(1.0).try_voxelize(),
        Err(VoxelizationError::InvalidShell {
            inner: 1.0,
            outer: 1.0
        })
    );
    assert!(tube.with_inner_thickness(2.0).voxelize().is_empty());
}
