//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections do not overlap. For a box and a triangle, the candidate axes are the three box
//! face normals, the triangle normal, and the nine cross products of a box axis with a
//! triangle edge.

pub use self::sat_obb_triangle::*;

mod sat_obb_triangle;
