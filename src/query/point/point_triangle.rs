use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;

/// Projects `pt` on the segment `[a, a + ab]`.
#[inline]
fn project_on_segment(a: &Point<Real>, ab: &Vector<Real>, pt: &Point<Real>) -> Point<Real> {
    let len_sq = ab.norm_squared();

    if len_sq == 0.0 {
        return *a;
    }

    let t = (ab.dot(&(pt - a)) / len_sq).max(0.0).min(1.0);
    a + ab * t
}

/// The point of the solid triangle closest to `pt`.
///
/// The Voronoï regions of the vertices, then of the edges, then of the face are checked in
/// turn. Degenerate triangles fall back to the closest point of their three edges.
pub fn closest_point_on_triangle(triangle: &Triangle, pt: &Point<Real>) -> Point<Real> {
    let a = triangle.a;
    let b = triangle.b;
    let c = triangle.c;

    let ab = b - a;
    let ac = c - a;
    let ap = pt - a;

    let ab_ap = ab.dot(&ap);
    let ac_ap = ac.dot(&ap);

    if ab_ap <= 0.0 && ac_ap <= 0.0 {
        // Voronoï region of `a`.
        return a;
    }

    let bp = pt - b;
    let ab_bp = ab.dot(&bp);
    let ac_bp = ac.dot(&bp);

    if ab_bp >= 0.0 && ac_bp <= ab_bp {
        // Voronoï region of `b`.
        return b;
    }

    let cp = pt - c;
    let ab_cp = ab.dot(&cp);
    let ac_cp = ac.dot(&cp);

    if ac_cp >= 0.0 && ab_cp <= ac_cp {
        // Voronoï region of `c`.
        return c;
    }

    let bc = c - b;
    let n = ab.cross(&ac);

    let vc = n.dot(&ab.cross(&ap));
    if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
        // Voronoï region of `ab`.
        let v = ab_ap / ab.norm_squared();
        return a + ab * v;
    }

    let vb = -n.dot(&ac.cross(&cp));
    if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
        // Voronoï region of `ac`.
        let w = ac_ap / ac.norm_squared();
        return a + ac * w;
    }

    let va = n.dot(&bc.cross(&bp));
    if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
        // Voronoï region of `bc`.
        let w = bc.dot(&bp) / bc.norm_squared();
        return b + bc * w;
    }

    // Voronoï region of the face.
    let sum = va + vb + vc;
    if sum != 0.0 {
        let denom = 1.0 / sum;
        let v = vb * denom;
        let w = vc * denom;
        return a + ab * v + ac * w;
    }

    // Nearly degenerate triangle: take the closest point of the three edges.
    let candidates = [
        project_on_segment(&a, &ab, pt),
        project_on_segment(&b, &bc, pt),
        project_on_segment(&c, &(a - c), pt),
    ];
    let mut best = candidates[0];
    let mut best_dist = na::distance_squared(&best, pt);

    for candidate in &candidates[1..] {
        let dist = na::distance_squared(candidate, pt);
        if dist < best_dist {
            best_dist = dist;
            best = *candidate;
        }
    }

    best
}

/// Squared distance between `pt` and the solid triangle.
#[inline]
pub fn triangle_distance_squared(triangle: &Triangle, pt: &Point<Real>) -> Real {
    na::distance_squared(&closest_point_on_triangle(triangle, pt), pt)
}
