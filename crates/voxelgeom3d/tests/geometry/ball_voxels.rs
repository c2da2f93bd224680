use core::f64::consts::PI;
use voxelgeom3d::math::{Point, Real};
use voxelgeom3d::shape::Ball;
use voxelgeom3d::transformation::voxelization::{Voxel, Voxelize, VoxelizationError};

#[test]
fn hollow_ball_shell() {
    let voxels = Ball::new(Point::origin(), 5.0)
        .with_inner_radius(3.0)
        .voxelize();

    assert_eq!(voxels.len(), 416);
    for voxel in &voxels {
        let d2 = voxel.center().coords.norm_squared();
        assert!(9.0 < d2 && d2 <= 25.0, "{:?} is outside of the shell", voxel);
    }
}

#[test]
fn hollow_ball_is_solid_minus_cavity() {
    let solid = Ball::new(Point::origin(), 5.0).voxelize();
    let hollow = Ball::new(Point::origin(), 5.0)
        .with_inner_radius(3.0)
        .voxelize();
    let cavity = Ball::new(Point::origin(), 3.0).voxelize();

    assert!(solid.is_superset(&hollow));
    assert_eq!(solid.difference(&hollow), cavity);
    assert_eq!(hollow.union(&cavity), solid);
}

#[test]
fn unit_ball_at_origin() {
    let voxels = Ball::new(Point::origin(), 1.0).voxelize();
    let expected: Vec<_> = (-1..1)
        .flat_map(|x| (-1..1).flat_map(move |y| (-1..1).map(move |z| Voxel::new(x, y, z))))
        .collect();

    assert_eq!(voxels.as_slice(), &expected[..]);
}

#[test]
fn ball_centered_on_a_cell_excludes_it() {
    let voxels = Ball::new(Point::new(0.5, 0.5, 0.5), 1.0).voxelize();

    assert_eq!(voxels.len(), 6);
    assert!(!voxels.contains(&Voxel::new(0, 0, 0)));
    assert!(voxels.contains(&Voxel::new(1, 0, 0)));
    assert!(voxels.contains(&Voxel::new(0, -1, 0)));
}

#[test]
fn ball_volume_converges() {
    for (radius, expected, max_error) in [
        (2.0, 32, 0.1),
        (5.0, 552, 0.1),
        (10.0, 4224, 0.1),
        (20.0, 33552, 0.1),
    ] {
        let voxels = Ball::new(Point::origin(), radius).voxelize();
        let volume: Real = 4.0 / 3.0 * PI * radius * radius * radius;

        assert_eq!(voxels.len(), expected);
        assert_relative_eq!(voxels.len() as Real, volume, max_relative = max_error);
    }
}

#[test]
fn ball_output_is_sorted_and_unique() {
    let voxels = Ball::new(Point::new(0.3, -7.2, 4.9), 6.5)
        .with_inner_radius(2.0)
        .voxelize();

    assert!(!voxels.is_empty());
    assert!(voxels.as_slice().windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn random_balls_respect_their_shell() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..20 {
        let center = Point::new(
            rng.rand_float() * 20.0 - 10.0,
            rng.rand_float() * 20.0 - 10.0,
            rng.rand_float() * 20.0 - 10.0,
        );
        let outer = 1.0 + rng.rand_float() * 6.0;
        let inner = rng.rand_float() * outer * 0.9;
        let ball = Ball::new(center, outer).with_inner_radius(inner);

        for voxel in &ball.voxelize() {
            let d2 = na::distance_squared(&voxel.center(), &center);
            assert!(inner * inner < d2 && d2 <= outer * outer);
        }
    }
}

#[test]
fn zero_radius_ball_is_empty() {
    let ball = Ball::new(Point::new(0.5, 0.5, 0.5), 0.0);

    assert_eq!(ball.try_voxelize(), Ok(Default::default()));
}

#[test]
fn invalid_shell_is_empty() {
    let ball = Ball::new(Point::origin(), 3.0).with_inner_radius(4.0);

    assert!(ball.voxelize().is_empty());
    assert_eq!(
        ball.try_voxelize(),
        Err(VoxelizationError::InvalidShell {
            inner: 4.0,
            outer: 3.0
        })
    );
}
