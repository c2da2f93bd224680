use crate::math::{Point, Real, UnitVector, DEGENERACY_EPSILON};

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate, i.e., if the norm of the cross
/// product of its edges is not larger than [`DEGENERACY_EPSILON`].
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    let ab = pts[1] - pts[0];
    let ac = pts[2] - pts[0];
    let res = ab.cross(&ac);

    UnitVector::try_new(res, DEGENERACY_EPSILON)
}
