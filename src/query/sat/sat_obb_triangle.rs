use crate::math::{Point, Real, Vector};
use crate::shape::{OrientedBox, Triangle};
use crate::utils::SAT_AXIS_EPSILON;

/// Are the projections of the box corners and of the triangle on `axis` disjoint?
#[inline]
pub fn obb_triangle_separated_on_axis(
    corners: &[Point<Real>; 8],
    triangle: &Triangle,
    axis: &Vector<Real>,
) -> bool {
    let mut box_min = Real::MAX;
    let mut box_max = -Real::MAX;

    for pt in corners.iter() {
        let val = pt.coords.dot(axis);
        box_min = box_min.min(val);
        box_max = box_max.max(val);
    }

    let (tri_min, tri_max) = triangle.extents_on_dir(axis);

    box_max < tri_min || tri_max < box_min
}

/// Separating axis test between an oriented box and a triangle.
///
/// Returns `true` if no separating axis was found, i.e., if the two shapes intersect.
pub fn obb_triangle_intersect(obb: &OrientedBox, triangle: &Triangle) -> bool {
    let mut corners = [Point::origin(); 8];
    obb.corners(&mut corners);

    obb_triangle_intersect_with_axes(
        &corners,
        &obb.axes(),
        triangle,
        &triangle.edges_scaled_directions(),
    )
}

/// Separating axis test between a box given by its corners and axes, and a triangle given with
/// its edge directions.
///
/// This is the same test as [`obb_triangle_intersect`] for callers that test one box against
/// many triangles and want to compute the box corners only once. Edge cross products with a
/// squared length at or below [`SAT_AXIS_EPSILON`] are skipped.
pub fn obb_triangle_intersect_with_axes(
    corners: &[Point<Real>; 8],
    box_axes: &[Vector<Real>; 3],
    triangle: &Triangle,
    triangle_edges: &[Vector<Real>; 3],
) -> bool {
    for axis in box_axes.iter() {
        if obb_triangle_separated_on_axis(corners, triangle, axis) {
            return false;
        }
    }

    let normal = triangle_edges[0].cross(&triangle_edges[1]);
    if obb_triangle_separated_on_axis(corners, triangle, &normal) {
        return false;
    }

    for box_axis in box_axes.iter() {
        for edge in triangle_edges.iter() {
            let axis = box_axis.cross(edge);

            if axis.norm_squared() > SAT_AXIS_EPSILON
                && obb_triangle_separated_on_axis(corners, triangle, &axis)
            {
                return false;
            }
        }
    }

    true
}
