use crate::math::{Real, Vector};
use crate::query::gjk::CsoPoint;
use arrayvec::ArrayVec;

#[inline]
fn same_direction(a: &Vector<Real>, b: &Vector<Real>) -> bool {
    a.dot(b) > 0.0
}

/// A simplex of up to four CSO points, the most recently added point first.
#[derive(Clone, Debug)]
pub struct Simplex {
    points: ArrayVec<CsoPoint, 4>,
}

impl Simplex {
    /// Creates a simplex with a single point.
    pub fn new(pt: CsoPoint) -> Self {
        let mut points = ArrayVec::new();
        points.push(pt);
        Simplex { points }
    }

    /// The number of points of this simplex.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this simplex has no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of this simplex, the most recently added first.
    #[inline]
    pub fn points(&self) -> &[CsoPoint] {
        &self.points
    }

    /// Adds a point in front of this simplex, dropping the oldest one if it already had four.
    #[inline]
    pub fn push_front(&mut self, pt: CsoPoint) {
        self.points.truncate(3);
        self.points.insert(0, pt);
    }

    fn set(&mut self, pts: &[CsoPoint]) {
        self.points.clear();
        self.points.extend(pts.iter().copied());
    }

    /// Reduces this simplex to the sub-simplex closest to the origin and updates the search
    /// direction accordingly.
    ///
    /// Returns `true` if this simplex is a tetrahedron enclosing the origin.
    pub fn evolve(&mut self, dir: &mut Vector<Real>) -> bool {
        match self.points.len() {
            2 => self.line(dir),
            3 => self.triangle(dir),
            4 => self.tetrahedron(dir),
            _ => false,
        }
    }

    fn line(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0];
        let b = self.points[1];

        let ab = b - a;
        let ao = -a.point.coords;

        if same_direction(&ab, &ao) {
            *dir = ab.cross(&ao).cross(&ab);
        } else {
            self.set(&[a]);
            *dir = ao;
        }

        false
    }

    fn triangle(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0];
        let b = self.points[1];
        let c = self.points[2];

        let ab = b - a;
        let ac = c - a;
        let ao = -a.point.coords;

        let abc = ab.cross(&ac);

        if same_direction(&abc.cross(&ac), &ao) {
            if same_direction(&ac, &ao) {
                self.set(&[a, c]);
                *dir = ac.cross(&ao).cross(&ac);
                false
            } else {
                self.set(&[a, b]);
                self.line(dir)
            }
        } else if same_direction(&ab.cross(&abc), &ao) {
            self.set(&[a, b]);
            self.line(dir)
        } else {
            if same_direction(&abc, &ao) {
                *dir = abc;
            } else {
                self.set(&[a, c, b]);
                *dir = -abc;
            }

            false
        }
    }

    fn tetrahedron(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0];
        let b = self.points[1];
        let c = self.points[2];
        let d = self.points[3];

        let ab = b - a;
        let ac = c - a;
        let ad = d - a;
        let ao = -a.point.coords;

        let abc = ab.cross(&ac);
        let acd = ac.cross(&ad);
        let adb = ad.cross(&ab);

        if same_direction(&abc, &ao) {
            self.set(&[a, b, c]);
            return self.triangle(dir);
        }

        if same_direction(&acd, &ao) {
            self.set(&[a, c, d]);
            return self.triangle(dir);
        }

        if same_direction(&adb, &ao) {
            self.set(&[a, d, b]);
            return self.triangle(dir);
        }

        true
    }
}
