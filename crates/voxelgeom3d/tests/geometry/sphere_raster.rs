use voxelgeom3d::math::{GridPoint, Point, Real};
use voxelgeom3d::shape::{Ball, SphereRaster};
use voxelgeom3d::transformation::voxelization::{Voxel, Voxelize, VoxelizationError};

#[test]
fn raster_sizes() {
    let origin = GridPoint::origin();

    for (radius, solid, surface) in [(0, 1, 1), (1, 7, 6), (5, 683, 222), (10, 4729, 882)] {
        let solid_set = SphereRaster::solid(origin, radius).voxelize();
        let surface_set = SphereRaster::surface(origin, radius).voxelize();

        assert_eq!(solid_set.len(), solid, "solid sphere of radius {}", radius);
        assert_eq!(surface_set.len(), surface, "surface of radius {}", radius);
        assert!(solid_set.is_superset(&surface_set));
    }
}

#[test]
fn raster_is_translated_with_its_center() {
    let at_origin = SphereRaster::surface(GridPoint::origin(), 4).voxelize();
    let moved = SphereRaster::surface(GridPoint::new(10, -3, 7), 4).voxelize();
    let expected: Vec<_> = at_origin
        .iter()
        .map(|v| Voxel::new(v.x + 10, v.y - 3, v.z + 7))
        .collect();

    assert_eq!(moved.as_slice(), &expected[..]);
}

#[test]
fn raster_is_larger_than_ball() {
    let raster = SphereRaster::solid(GridPoint::origin(), 10).voxelize();
    let ball = Ball::new(Point::origin(), 10.0).voxelize();
    let ratio = raster.len() as Real / ball.len() as Real;

    assert!(ratio > 1.1 && ratio < 1.15, "unexpected ratio {}", ratio);
}

#[test]
fn negative_radius() {
    let sphere = SphereRaster::solid(GridPoint::origin(), -2);

    assert!(sphere.voxelize().is_empty());
    assert_eq!(
        sphere.try_voxelize(),
        Err(VoxelizationError::NegativeExtent(-2.0))
    );
}
