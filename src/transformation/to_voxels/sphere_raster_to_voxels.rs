use crate::math::Real;
use crate::shape::SphereRaster;
use crate::transformation::voxelization::{
    check_cell_budget, Voxel, VoxelSet, Voxelize, VoxelizationError, VoxelizationOptions,
};

impl Voxelize for SphereRaster {
    fn try_voxelize_with(
        &self,
        options: &VoxelizationOptions,
    ) -> Result<VoxelSet, VoxelizationError> {
        self.validate()?;

        let r = i64::from(self.radius);
        let side = (2 * r + 1) as u64;
        check_cell_budget(side.saturating_mul(side).saturating_mul(side), options)?;

        let center = self.center.map(i64::from);
        let mut cells = Vec::new();
        let mut push = |x: i64, y: i64, z: i64| {
            if let (Ok(x), Ok(y), Ok(z)) = (i32::try_from(x), i32::try_from(y), i32::try_from(z)) {
                cells.push(Voxel::new(x, y, z));
            }
        };

        for dz in -r..=r {
            let z = center.z + dz;
            let r_slice = ((r * r - dz * dz) as Real).sqrt().round() as i64;

            // Midpoint circle, walking the first octant.
            let (mut x, mut y) = (r_slice, 0);
            let mut p = 1 - r_slice;

            while x >= y {
                if self.solid {
                    for (half_width, dy) in [(x, y), (x, -y), (y, x), (y, -x)] {
                        for dx in -half_width..=half_width {
                            push(center.x + dx, center.y + dy, z);
                        }
                    }
                } else {
                    for (dx, dy) in [
                        (x, y),
                        (-x, y),
                        (x, -y),
                        (-x, -y),
                        (y, x),
                        (-y, x),
                        (y, -x),
                        (-y, -x),
                    ] {
                        push(center.x + dx, center.y + dy, z);
                    }
                }

                y += 1;

                if p < 0 {
                    p += 2 * y + 1;
                } else {
                    x -= 1;
                    p += 2 * y - 2 * x + 1;
                }
            }
        }

        Ok(cells.into_iter().collect())
    }
}
