//! Boolean GJK overlap test.
//!
//! The test works on the Configuration Space Obstacle (the Minkowski difference `g1 - g2`) of
//! the two shapes: they overlap if and only if it contains the origin. A simplex of at most
//! four support points is grown toward the origin until it encloses it, or until a support
//! point fails to pass the origin, which proves the shapes are separated.

use crate::math::{Real, Vector};
use crate::query::gjk::{CsoPoint, Simplex};
use crate::shape::SupportMap;

/// Options of the GJK overlap test.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// Maximum number of support points added before giving up.
    ///
    /// A test that did not conclude within this budget reports no overlap.
    pub max_iterations: usize,
}

impl GjkOptions {
    /// The default iteration budget.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
}

impl Default for GjkOptions {
    fn default() -> Self {
        GjkOptions {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Tests whether `g1` and `g2` overlap.
///
/// `initial_dir` is the first search direction. It should point from the CSO toward the
/// origin, e.g., from the center of `g1` to the center of `g2`. A zero `initial_dir` is
/// replaced by the `x` axis.
///
/// Returns `false` if a support point proves the shapes separated, or if no conclusion is
/// reached within `options.max_iterations` iterations.
pub fn intersection_test<G1: ?Sized, G2: ?Sized>(
    g1: &G1,
    g2: &G2,
    initial_dir: &Vector<Real>,
    options: &GjkOptions,
) -> bool
where
    G1: SupportMap,
    G2: SupportMap,
{
    let mut dir = if initial_dir.norm_squared() > 0.0 {
        *initial_dir
    } else {
        Vector::x()
    };

    let support = CsoPoint::from_shapes(g1, g2, &dir);

    if support.point.coords.dot(&dir) <= 0.0 {
        return false;
    }

    let mut simplex = Simplex::new(support);
    dir = -support.point.coords;

    for _ in 0..options.max_iterations {
        if dir.norm_squared() <= Real::EPSILON * Real::EPSILON {
            // The origin lies on the current simplex.
            return true;
        }

        let support = CsoPoint::from_shapes(g1, g2, &dir);

        if support.point.coords.dot(&dir) <= 0.0 {
            return false;
        }

        simplex.push_front(support);

        if simplex.evolve(&mut dir) {
            return true;
        }
    }

    log::debug!(
        "GJK reached its iteration limit ({}) without conclusion.",
        options.max_iterations
    );

    false
}
