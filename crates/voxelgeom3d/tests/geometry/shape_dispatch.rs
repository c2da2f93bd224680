use voxelgeom3d::math::{Point, Vector};
use voxelgeom3d::shape::{
    Ball, Disc, Line, OrientedCube, Plane, ShapeType, Tetrahedron, Tube, VoxelShape,
};
use voxelgeom3d::transformation::voxelize_all;
use voxelgeom3d::transformation::voxelization::{
    Voxelize, VoxelizationError, VoxelizationOptions,
};

fn all_shapes() -> Vec<VoxelShape> {
    vec![
        Ball::new(Point::origin(), 3.0).into(),
        Tube::new(Point::origin(), Point::new(5.0, 2.0, 1.0), 1.5).into(),
        Line::new(Point::origin(), Point::new(-4.0, 7.0, 2.0)).into(),
        Plane::new(Vector::new(0.0, 1.0, 1.0), Point::new(1.0, 1.0, 1.0))
            .with_rect(6.0, 4.0)
            .into(),
        Disc::new(Point::origin(), Vector::x(), 4.0).into(),
        OrientedCube::new(Point::new(2.0, 2.0, 2.0), 3.0).into(),
        Tetrahedron::new(
            Point::origin(),
            Point::new(6.0, 0.0, 0.0),
            Point::new(0.0, 6.0, 0.0),
            Point::new(0.0, 0.0, 6.0),
        )
        .into(),
    ]
}

#[test]
fn dispatch_matches_concrete_shapes() {
    let shapes = all_shapes();
    let types: Vec<_> = shapes.iter().map(|s| s.shape_type()).collect();

    assert_eq!(
        types,
        vec![
            ShapeType::Ball,
            ShapeType::Tube,
            ShapeType::Line,
            ShapeType::Plane,
            ShapeType::Disc,
            ShapeType::OrientedCube,
            ShapeType::Tetrahedron,
        ]
    );

    if let VoxelShape::Ball(ball) = &shapes[0] {
        assert_eq!(shapes[0].voxelize(), ball.voxelize());
    } else {
        panic!("The first shape must be a ball.");
    }
}

#[test]
fn voxelize_all_preserves_order() {
    let shapes = all_shapes();
    let options = VoxelizationOptions::default();
    let sets = voxelize_all(&shapes, &options);

    assert_eq!(sets.len(), shapes.len());
    for (shape, set) in shapes.iter().zip(&sets) {
        assert!(!set.is_empty(), "{:?} produced no voxel", shape.shape_type());
        assert_eq!(set, &shape.voxelize_with(&options));
        assert!(set.as_slice().windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn invalid_shapes_yield_empty_sets() {
    let shapes: Vec<VoxelShape> = vec![
        Ball::new(Point::origin(), 1.0).with_inner_radius(2.0).into(),
        Plane::new(Vector::zeros(), Point::origin()).into(),
        Ball::new(Point::origin(), 2.0).into(),
    ];
    let sets = voxelize_all(&shapes, &VoxelizationOptions::default());

    assert!(sets[0].is_empty());
    assert!(sets[1].is_empty());
    assert_eq!(sets[2].len(), 32);
}

#[test]
fn shapes_beyond_the_grid_are_rejected() {
    let far = Point::new(3.0e9, 0.0, 0.0);
    let shapes: Vec<VoxelShape> = vec![
        Ball::new(far, 3.0).into(),
        Tube::new(Point::origin(), far, 1.5).into(),
        Line::new(far, Point::origin()).into(),
        Plane::new(Vector::z(), far).with_rect(6.0, 4.0).into(),
        Disc::new(far, Vector::x(), 4.0).into(),
        OrientedCube::new(far, 3.0).into(),
        Tetrahedron::new(
            far,
            far + Vector::new(6.0, 0.0, 0.0),
            far + Vector::new(0.0, 6.0, 0.0),
            far + Vector::new(0.0, 0.0, 6.0),
        )
        .into(),
    ];

    for shape in &shapes {
        assert!(
            matches!(
                shape.try_voxelize(),
                Err(VoxelizationError::CoordinateOutOfRange(_))
            ),
            "{:?} was not rejected",
            shape.shape_type()
        );
        assert!(shape.voxelize().is_empty());
    }
}

#[test]
fn shapes_at_the_grid_limits() {
    let center = Point::new(i32::MAX as f64 - 2.0, i32::MIN as f64 + 2.0, 0.0);
    let voxels = Ball::new(center, 1.0).voxelize();

    assert_eq!(voxels.len(), 8);
    assert!(voxels
        .iter()
        .all(|v| v.x >= i32::MAX - 3 && v.y <= i32::MIN + 2));
}
