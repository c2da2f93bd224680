use crate::math::{Real, UnitVector, Vector, DEGENERACY_EPSILON};

/// Computes two unit vectors `(u, v)` spanning the plane orthogonal to `normal`.
///
/// The returned frame is right-handed: `u × v` is `normal` (normalized). The cross product
/// with the `x` axis is used to seed `u`, unless `normal` is parallel to `x` in which case the
/// `y` axis is used instead. If the seeded vector is still negligible, the `z` axis is tried
/// before falling back to a canonical axis-aligned basis. A zero `normal` returns
/// `(x, y)`.
///
/// # Example
///
/// ```
/// use voxelgeom3d::math::Vector;
/// use voxelgeom3d::utils::plane_basis;
///
/// let n = Vector::new(1.0, 1.0, 1.0).normalize();
/// let (u, v) = plane_basis(&n);
///
/// assert!(u.dot(&n).abs() < 1.0e-12);
/// assert!(v.dot(&n).abs() < 1.0e-12);
/// assert!(u.dot(&v).abs() < 1.0e-12);
/// assert!((u.cross(&v) - n).norm() < 1.0e-12);
/// ```
pub fn plane_basis(normal: &Vector<Real>) -> (Vector<Real>, Vector<Real>) {
    let Some(normal) = UnitVector::try_new(*normal, DEGENERACY_EPSILON) else {
        return (Vector::x(), Vector::y());
    };

    let seed = if abs_diff_eq!(normal.cross(&Vector::x()).norm(), 0.0, epsilon = 1.0e-8) {
        Vector::y()
    } else {
        Vector::x()
    };

    for reference in [seed, Vector::z()] {
        if let Some(u) = UnitVector::try_new(normal.cross(&reference), DEGENERACY_EPSILON) {
            let u = u.into_inner();
            let v = normal.cross(&u);
            return (u, v);
        }
    }

    log::debug!(
        "Could not seed a plane basis for the normal {:?}; using an axis-aligned basis.",
        normal
    );
    axis_aligned_basis(&normal)
}

/// The pair of coordinate axes spanning the plane orthogonal to the dominant axis of `normal`.
fn axis_aligned_basis(normal: &Vector<Real>) -> (Vector<Real>, Vector<Real>) {
    match normal.iamax() {
        0 => (Vector::y(), Vector::z()),
        1 => (Vector::z(), Vector::x()),
        _ => (Vector::x(), Vector::y()),
    }
}
