use crate::math::{Point, Real, DEGENERACY_EPSILON};

/// Projects `pt` on the segment `[a, b]`.
///
/// A segment with a squared length smaller than [`DEGENERACY_EPSILON`] is treated as the
/// single point `a`.
#[inline]
pub fn closest_point_on_segment(pt: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Point<Real> {
    let ab = b - a;
    let ap = pt - a;
    let sqnab = ab.norm_squared();

    if sqnab < DEGENERACY_EPSILON {
        return *a;
    }

    let ab_ap = ab.dot(&ap);

    if ab_ap <= 0.0 {
        // Voronoï region of vertex 'a'.
        *a
    } else if ab_ap >= sqnab {
        // Voronoï region of vertex 'b'.
        *b
    } else {
        // Voronoï region of the segment interior.
        a + ab * (ab_ap / sqnab)
    }
}

/// The Euclidean distance between `pt` and the closest point of the segment `[a, b]`.
///
/// Degenerate segments (`|b - a|² < 1.0e-9`) are treated as the point `a`.
///
/// # Example
///
/// ```
/// use voxelgeom3d::math::Point;
/// use voxelgeom3d::utils::distance_point_to_segment;
///
/// let a = Point::new(0.0, 0.0, 0.0);
/// let b = Point::new(10.0, 0.0, 0.0);
///
/// assert_eq!(distance_point_to_segment(&Point::new(5.0, 3.0, 0.0), &a, &b), 3.0);
/// assert_eq!(distance_point_to_segment(&Point::new(-4.0, 3.0, 0.0), &a, &b), 5.0);
/// ```
#[inline]
pub fn distance_point_to_segment(pt: &Point<Real>, a: &Point<Real>, b: &Point<Real>) -> Real {
    na::distance(pt, &closest_point_on_segment(pt, a, b))
}
