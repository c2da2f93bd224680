/*!
voxelgeom3d
===========

**voxelgeom3d** converts continuous 3-dimensional primitives (balls, tubes,
lines, bounded planes, discs, oriented cubes and tetrahedra) into sets of
integer voxel coordinates on a unit grid.

Each conversion is a pure function of the shape parameters: the engine keeps no
voxel grid of its own and always returns the same sorted, duplicate-free
[`VoxelSet`](transformation::voxelization::VoxelSet) for the same input.

```
use voxelgeom3d::math::Point;
use voxelgeom3d::shape::Ball;
use voxelgeom3d::transformation::voxelization::Voxelize;

let hollow = Ball::new(Point::origin(), 5.0).with_inner_radius(3.0);
let voxels = hollow.voxelize();

for voxel in voxels.iter() {
    let d2 = voxel.center().coords.norm_squared();
    assert!(9.0 < d2 && d2 <= 25.0);
}
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod shape;
pub mod transformation;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Matrix3, Point3, Rotation3, Unit, UnitVector3, Vector2, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// Squared lengths, cross products and segment lengths below this value are degenerate.
    pub const DEGENERACY_EPSILON: Real = 1.0e-9;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The rotation matrix type.
    pub type Rotation<N> = Rotation3<N>;

    /// Integer coordinates of a voxel, or an integer offset between voxels.
    pub type GridPoint = Point3<i32>;

    /// An integer offset applied to voxel coordinates.
    pub type GridVector = Vector3<i32>;
}
