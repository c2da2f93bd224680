use crate::math::{GridPoint, Point, Real};
use crate::transformation::voxelization::{Voxel, VoxelizationError};
use crate::utils;

/// A digital line between two points.
///
/// Both endpoints are rounded to the nearest integer coordinates (halfway cases round away
/// from zero) before being joined by a 3D Bresenham walk along the axis with the largest
/// extent. The resulting path is one voxel thick, contains both endpoints, and has exactly
/// `max(|dx|, |dy|, |dz|) + 1` voxels.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Line {
    /// The first endpoint of the line.
    pub p1: Point<Real>,
    /// The second endpoint of the line.
    pub p2: Point<Real>,
}

impl Line {
    /// Creates the line from `p1` to `p2`.
    #[inline]
    pub fn new(p1: Point<Real>, p2: Point<Real>) -> Line {
        Line { p1, p2 }
    }

    /// The endpoints of this line, rounded to integer grid coordinates.
    ///
    /// Fails if a coordinate is not finite or if a rounded coordinate doesn't fit in an `i32`.
    pub fn grid_endpoints(&self) -> Result<(GridPoint, GridPoint), VoxelizationError> {
        Ok((
            utils::snap_to_grid(&self.p1, Real::round)?,
            utils::snap_to_grid(&self.p2, Real::round)?,
        ))
    }

    /// The number of voxels of this line's path.
    pub fn num_voxels(&self) -> Result<u64, VoxelizationError> {
        let (a, b) = self.grid_endpoints()?;
        let len = (0..3)
            .map(|i| (i64::from(b[i]) - i64::from(a[i])).unsigned_abs())
            .max()
            .unwrap_or(0);
        Ok(len + 1)
    }

    /// The voxels of this line in walk order, from `p1` to `p2`.
    ///
    /// Returns an empty path if the endpoints can't be placed on the grid.
    pub fn path(&self) -> Vec<Voxel> {
        match self.grid_endpoints() {
            Ok((a, b)) => bresenham(a, b),
            Err(_) => Vec::new(),
        }
    }
}

fn bresenham(a: GridPoint, b: GridPoint) -> Vec<Voxel> {
    let a = a.map(i64::from);
    let b = b.map(i64::from);
    let delta = (b - a).abs();
    let step = (b - a).map(i64::signum);

    // The driving axis is the first one with the largest extent.
    let drive = if delta.x >= delta.y && delta.x >= delta.z {
        0
    } else if delta.y >= delta.z {
        1
    } else {
        2
    };
    let (i, j) = ((drive + 1) % 3, (drive + 2) % 3);

    let mut err_i = 2 * delta[i] - delta[drive];
    let mut err_j = 2 * delta[j] - delta[drive];
    let mut curr = a;
    let mut path = Vec::with_capacity(delta[drive] as usize + 1);
    path.push(to_voxel(&curr));

    for _ in 0..delta[drive] {
        curr[drive] += step[drive];

        if err_i >= 0 {
            curr[i] += step[i];
            err_i -= 2 * delta[drive];
        }

        if err_j >= 0 {
            curr[j] += step[j];
            err_j -= 2 * delta[drive];
        }

        err_i += 2 * delta[i];
        err_j += 2 * delta[j];
        path.push(to_voxel(&curr));
    }

    path
}

// The walk stays between two endpoints that fit in an `i32`.
fn to_voxel(pt: &na::Point3<i64>) -> Voxel {
    Voxel::new(pt.x as i32, pt.y as i32, pt.z as i32)
}
