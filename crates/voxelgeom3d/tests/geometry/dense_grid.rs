use voxelgeom3d::math::{GridVector, Point};
use voxelgeom3d::shape::{Ball, Line};
use voxelgeom3d::transformation::voxelization::{place_voxels, DenseGrid, Voxelize};

#[test]
fn ball_in_dense_grid() {
    let ball = Ball::new(Point::origin(), 5.0).voxelize();
    let (grid, offset) = DenseGrid::from_voxels(&ball, 2u8).unwrap();

    assert_eq!(offset, GridVector::new(5, 5, 5));
    assert_eq!(grid.dimensions(), [10, 10, 10]);
    assert_eq!(grid.count_filled(), ball.len());

    for ([i, j, k], value) in grid.iter() {
        let expected = ball.iter().any(|v| {
            [v.x + 5, v.y + 5, v.z + 5] == [i as i32, j as i32, k as i32]
        });
        assert_eq!(value == 2, expected);
    }
}

#[test]
fn partially_visible_shape_is_clamped() {
    let line = Line::new(Point::new(-5.0, 1.0, 1.0), Point::new(5.0, 1.0, 1.0)).voxelize();
    let mut grid = DenseGrid::new([4, 4, 4]).unwrap();

    assert_eq!(grid.write_voxels(&line, 9u32, GridVector::zeros()), 4);
    assert_eq!(grid.write_voxels(&line, 9u32, GridVector::new(2, 0, 0)), 4);
    assert_eq!(grid.count_filled(), 4);
    assert_eq!(grid.get(3, 1, 1), Some(9));
    assert_eq!(grid.get(3, 2, 1), Some(0));
}

#[test]
fn placement_into_grid() {
    let line = Line::new(Point::origin(), Point::new(3.0, 3.0, 3.0)).voxelize();
    let mut grid = DenseGrid::new([4, 4, 4]).unwrap();

    assert_eq!(place_voxels(&line, 1i8, &mut grid), 4);
    assert_eq!(grid.count_filled(), 4);
    assert_eq!(grid.get(2, 2, 2), Some(1));
}
