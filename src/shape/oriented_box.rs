use crate::bounding_volume::{Aabb, BoundingSphere};
use crate::entity::RigidBody;
use crate::math::{Point, Real, Rotation, Vector};

/// Sign of each local coordinate of the eight box corners.
///
/// Indices 0 to 3 lie on the `-z` face and 4 to 7 on the `+z` face. Corners 1, 2, 5, 6 lie on
/// the `+x` face and 0, 3, 4, 7 on the `-x` face. This is the same order as
/// [`Aabb::vertices`].
pub const CORNER_SIGNS: [[Real; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// The twelve box edges, as pairs of corner indices, in the order the surface crossing
/// solver visits them.
pub const OBB_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 7),
    (5, 6),
    (6, 7),
];

/// Index of the box center in a nine-point buffer filled by [`OrientedBox::corners_and_center`].
pub const CENTER_SLOT: usize = 8;

/// An oriented bounding box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct OrientedBox {
    /// The world-space center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along its local axes.
    pub half_extents: Vector<Real>,
    /// The orientation of the box local axes.
    pub rotation: Rotation<Real>,
}

impl OrientedBox {
    /// Creates a new oriented box.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Rotation<Real>) -> Self {
        OrientedBox {
            center,
            half_extents,
            rotation,
        }
    }

    /// The oriented box occupying the same space as `aabb`.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.center(), aabb.half_extents(), Rotation::identity())
    }

    /// The oriented box of a rigid body.
    ///
    /// It is centered at the center of the body world-space bounds, has the half-extents of
    /// its local bounds, and follows the rotation of its world transform.
    pub fn from_body<B: RigidBody + ?Sized>(body: &B) -> Self {
        Self::new(
            body.world_aabb().center(),
            body.local_aabb().half_extents(),
            body.world_transform().rotation,
        )
    }

    /// The three local axes of this box, expressed in world space.
    #[inline]
    pub fn axes(&self) -> [Vector<Real>; 3] {
        [
            self.rotation * Vector::x(),
            self.rotation * Vector::y(),
            self.rotation * Vector::z(),
        ]
    }

    /// The largest half-extent of this box.
    #[inline]
    pub fn max_half_extent(&self) -> Real {
        self.half_extents.amax()
    }

    /// The `i`-th corner of this box, following [`CORNER_SIGNS`].
    ///
    /// # Panics
    /// If `i >= 8`.
    #[inline]
    pub fn corner(&self, i: usize) -> Point<Real> {
        let local = self.half_extents.component_mul(&Vector::from(CORNER_SIGNS[i]));
        self.center + self.rotation * local
    }

    /// Writes the eight corners of this box into `out`.
    #[inline]
    pub fn corners(&self, out: &mut [Point<Real>; 8]) {
        for (i, pt) in out.iter_mut().enumerate() {
            *pt = self.corner(i);
        }
    }

    /// Writes the eight corners of this box into `out`, followed by its center at
    /// [`CENTER_SLOT`].
    #[inline]
    pub fn corners_and_center(&self, out: &mut [Point<Real>; 9]) {
        for (i, pt) in out.iter_mut().take(8).enumerate() {
            *pt = self.corner(i);
        }
        out[CENTER_SLOT] = self.center;
    }

    /// Expresses a world-space point in the local frame of this box.
    #[inline]
    pub fn to_local(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.inverse_transform_vector(&(pt - self.center)))
    }

    /// Is `pt` inside of this box or on its boundary?
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local = self.to_local(pt);
        local.coords.abs().iter().zip(self.half_extents.iter()).all(|(c, h)| *c <= *h)
    }

    /// The axis-aligned box enclosing this oriented box.
    pub fn aabb(&self) -> Aabb {
        let rot = self.rotation.to_rotation_matrix();
        let ws_half_extents = rot.matrix().abs() * self.half_extents;
        Aabb::from_half_extents(self.center, ws_half_extents)
    }

    /// The sphere centered at the box center and passing through its corners.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.center, self.half_extents.norm())
    }
}
