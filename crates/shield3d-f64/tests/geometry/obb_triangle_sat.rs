use na::{Point3, UnitQuaternion, Vector3};
use shield3d_f64::bounding_volume::{Aabb, BoundingSphere};
use shield3d_f64::query;
use shield3d_f64::shape::{OrientedBox, Triangle};

#[test]
fn sat_agrees_with_obvious_cases() {
    let obb = OrientedBox::new(
        Point3::new(1.0, 1.0, 1.0),
        Vector3::new(1.0, 2.0, 0.5),
        UnitQuaternion::from_euler_angles(0.3, 0.2, -0.6),
    );

    // A triangle around the box center cuts through it.
    let through = Triangle::new(
        obb.center + Vector3::new(-5.0, -5.0, 0.0),
        obb.center + Vector3::new(5.0, -5.0, 0.0),
        obb.center + Vector3::new(0.0, 5.0, 0.0),
    );
    assert!(query::obb_triangle_intersect(&obb, &through));

    // A triangle farther than the box bounding sphere cannot touch it.
    let radius = obb.half_extents.norm();
    let far = Triangle::new(
        obb.center + Vector3::new(radius + 0.1, 0.0, 0.0),
        obb.center + Vector3::new(radius + 3.0, 1.0, 0.0),
        obb.center + Vector3::new(radius + 3.0, -1.0, 1.0),
    );
    assert!(!query::obb_triangle_intersect(&obb, &far));

    // A triangle with a box corner as vertex touches it.
    let corner = obb.corner(6);
    let touching = Triangle::new(
        corner,
        corner + Vector3::new(5.0, 0.0, 0.0),
        corner + Vector3::new(0.0, 5.0, 1.0),
    );
    assert!(query::obb_triangle_intersect(&obb, &touching));
}

#[test]
fn prefilters_never_reject_sat_hits() {
    let mut rng = oorandom::Rand64::new(31);
    let aabb = Aabb::from_half_extents(Point3::origin(), Vector3::new(1.0, 0.5, 2.0));
    let obb = OrientedBox::from_aabb(&aabb);

    for _ in 0..2000 {
        let mut rand_pt = || {
            Point3::new(
                rng.rand_float() * 8.0 - 4.0,
                rng.rand_float() * 8.0 - 4.0,
                rng.rand_float() * 8.0 - 4.0,
            )
        };
        let tri = Triangle::new(rand_pt(), rand_pt(), rand_pt());

        let sat = query::obb_triangle_intersect(&obb, &tri);
        assert_eq!(sat, aabb.intersects_triangle(&tri));

        if sat {
            assert!(query::spheres_intersect(&aabb.bounding_sphere(), &tri));
            assert!(query::obb_sphere_intersect(&obb, &BoundingSphere::from_triangle(&tri)));
        }
    }
}

#[test]
fn moller_trumbore() {
    let tri = Triangle::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
    );

    let down = query::Ray::new(Point3::new(0.5, 0.5, 3.0), -Vector3::z());
    assert_relative_eq!(query::ray_triangle_toi(&down, &tri).unwrap(), 3.0, epsilon = 1.0e-9);
    assert!(query::ray_intersects_triangle(&down, &tri));

    let beside = query::Ray::new(Point3::new(1.5, 1.5, 3.0), -Vector3::z());
    assert!(!query::ray_intersects_triangle(&beside, &tri));

    let parallel = query::Ray::new(Point3::new(0.5, 0.5, 3.0), Vector3::x());
    assert!(!query::ray_intersects_triangle(&parallel, &tri));

    let behind = query::Ray::new(Point3::new(0.5, 0.5, 3.0), Vector3::z());
    assert!(!query::ray_intersects_triangle(&behind, &tri));
}
