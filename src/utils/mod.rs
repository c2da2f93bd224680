//! Various unsorted geometrical operators shared by the voxelizers.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::euler::rotation_from_euler_degrees;
pub use self::grid_snap::snap_to_grid;
pub use self::plane_basis::plane_basis;
pub use self::segment_distance::{closest_point_on_segment, distance_point_to_segment};
pub use self::shell::is_in_shell;

mod ccw_face_normal;
mod center;
mod euler;
mod grid_snap;
mod plane_basis;
mod segment_distance;
mod shell;
