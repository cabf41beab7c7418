use crate::math::DEFAULT_EPSILON;
use crate::query::gjk::{self, GjkOptions};
use crate::shape::Ellipsoid;

/// Tests whether two ellipsoid shields overlap, with the default GJK options.
///
/// See [`ellipsoids_intersect_with_options`].
#[inline]
pub fn ellipsoids_intersect(a: &Ellipsoid, b: &Ellipsoid) -> bool {
    ellipsoids_intersect_with_options(a, b, &GjkOptions::default())
}

/// Tests whether two ellipsoid shields overlap.
///
/// Shields with coincident centers always overlap. Otherwise, GJK runs on the support maps of
/// both ellipsoids, starting from the direction joining their centers. The ellipsoid support
/// map lies on the sphere of the largest semi-axis, so elongated shields may be reported as
/// overlapping slightly before their surfaces actually touch.
///
/// The result does not depend on the order of `a` and `b`.
pub fn ellipsoids_intersect_with_options(
    a: &Ellipsoid,
    b: &Ellipsoid,
    options: &GjkOptions,
) -> bool {
    let (a, b) = canonical_order(a, b);
    let dir = b.center() - a.center();

    if dir.norm_squared() <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        return true;
    }

    gjk::intersection_test(a, b, &dir, options)
}

/// Sorts both shields by the lexicographic order of their transforms.
fn canonical_order<'a>(a: &'a Ellipsoid, b: &'a Ellipsoid) -> (&'a Ellipsoid, &'a Ellipsoid) {
    for (ea, eb) in a.matrix.iter().zip(b.matrix.iter()) {
        if ea < eb {
            return (a, b);
        }
        if ea > eb {
            return (b, a);
        }
    }

    (a, b)
}
