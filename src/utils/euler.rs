use crate::math::{Real, Rotation};

/// Builds a rotation matrix from Euler angles given in degrees.
///
/// The resulting rotation is `Rz(yaw) * Ry(pitch) * Rx(roll)`: the roll around `x` is
/// applied first, then the pitch around `y`, then the yaw around `z`.
pub fn rotation_from_euler_degrees(yaw: Real, pitch: Real, roll: Real) -> Rotation<Real> {
    Rotation::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
}
