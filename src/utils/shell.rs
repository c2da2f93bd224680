use crate::math::Real;

/// Tests whether a squared distance lies in the shell between `inner` and `outer`.
///
/// The outer bound is inclusive and the inner bound is exclusive, even when `inner` is zero:
/// a point at distance zero is never part of a shell.
#[inline]
pub fn is_in_shell(sq_dist: Real, inner: Real, outer: Real) -> bool {
    inner * inner < sq_dist && sq_dist <= outer * outer
}
