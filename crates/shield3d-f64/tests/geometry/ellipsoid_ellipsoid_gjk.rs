use na::{Point3, UnitQuaternion, Vector3};
use shield3d_f64::query::{self, GjkOptions};
use shield3d_f64::shape::Ellipsoid;

fn random_shield(rng: &mut oorandom::Rand64) -> Ellipsoid {
    let center = Point3::new(
        rng.rand_float() * 16.0 - 8.0,
        rng.rand_float() * 16.0 - 8.0,
        rng.rand_float() * 16.0 - 8.0,
    );
    let axes = Vector3::new(
        rng.rand_float() * 3.0 + 0.2,
        rng.rand_float() * 3.0 + 0.2,
        rng.rand_float() * 3.0 + 0.2,
    );
    let rotation = UnitQuaternion::from_euler_angles(
        rng.rand_float() * 6.0,
        rng.rand_float() * 6.0,
        rng.rand_float() * 6.0,
    );
    Ellipsoid::from_center_axes(center, axes, &rotation).unwrap()
}

#[test]
fn overlap_is_symmetric_and_bounded_by_max_radii() {
    let mut rng = oorandom::Rand64::new(1234);

    for _ in 0..1000 {
        let a = random_shield(&mut rng);
        let b = random_shield(&mut rng);

        let ab = query::ellipsoids_intersect(&a, &b);
        assert_eq!(ab, query::ellipsoids_intersect(&b, &a));
        assert!(query::ellipsoids_intersect(&a, &a));

        if na::distance(&a.center(), &b.center()) > a.max_radius() + b.max_radius() {
            assert!(!ab);
        }
    }
}

#[test]
fn shields_sharing_a_center_overlap() {
    let a = Ellipsoid::from_center_axes(
        Point3::new(2.0, 2.0, 2.0),
        Vector3::new(10.0, 0.5, 0.5),
        &UnitQuaternion::identity(),
    )
    .unwrap();
    let b = Ellipsoid::from_center_axes(
        Point3::new(2.0, 2.0, 2.0),
        Vector3::new(0.5, 0.5, 10.0),
        &UnitQuaternion::from_euler_angles(0.3, 0.0, 0.0),
    )
    .unwrap();
    let options = GjkOptions { max_iterations: 0 };
    assert!(query::ellipsoids_intersect_with_options(&a, &b, &options));
}
