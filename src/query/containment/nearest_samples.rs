use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::query::point::triangle_distance_squared;
use crate::shape::Triangle;

/// The point of `points` closest to `pos`.
///
/// Only the first `limit` points are scanned if `limit` is set. Returns `None` if no point
/// was scanned. Ties keep the first point.
pub fn closest_vert(
    points: &[Point<Real>],
    pos: &Point<Real>,
    limit: Option<usize>,
) -> Option<Point<Real>> {
    let len = limit.map_or(points.len(), |l| l.min(points.len()));
    closest_vert_index(&points[..len], pos).map(|i| points[i])
}

/// Index of the point of `points` closest to `pos`, or `None` if `points` is empty.
pub fn closest_vert_index(points: &[Point<Real>], pos: &Point<Real>) -> Option<usize> {
    let mut best = Real::MAX;
    let mut result = None;

    for (i, pt) in points.iter().enumerate() {
        let sq = na::distance_squared(pt, pos);

        if sq < best {
            best = sq;
            result = Some(i);
        }
    }

    result
}

/// Index of the first vertex of the triangle of `tri_points` closest to `pos`.
///
/// `tri_points` is read as consecutive vertex triplets; trailing vertices that do not form a
/// full triangle are ignored. Returns `0` if there is no triangle.
pub fn closest_triangle(tri_points: &[Point<Real>], pos: &Point<Real>) -> usize {
    let mut best = Real::MAX;
    let mut result = 0;

    for (i, tri) in tri_points.chunks_exact(3).enumerate() {
        let triangle = Triangle::new(tri[0], tri[1], tri[2]);
        let sq = triangle_distance_squared(&triangle, pos);

        if sq < best {
            best = sq;
            result = i * 3;
        }
    }

    result
}

/// Collects the vertices of every indexed triangle intersecting `aabb`.
///
/// `face_indices` is read as index triplets into `verts`. The three vertices of each
/// intersecting triangle are pushed to `out`, which is not cleared. Triplets referencing
/// vertices out of the bounds of `verts` are skipped.
pub fn intersect_small_box(
    face_indices: &[usize],
    verts: &[Point<Real>],
    aabb: &Aabb,
    out: &mut Vec<Point<Real>>,
) {
    for idx in face_indices.chunks_exact(3) {
        let (a, b, c) = match (verts.get(idx[0]), verts.get(idx[1]), verts.get(idx[2])) {
            (Some(a), Some(b), Some(c)) => (*a, *b, *c),
            _ => continue,
        };

        if aabb.intersects_triangle(&Triangle::new(a, b, c)) {
            out.extend_from_slice(&[a, b, c]);
        }
    }
}
