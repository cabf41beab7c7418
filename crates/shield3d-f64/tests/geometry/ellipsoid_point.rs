use na::{Point3, UnitQuaternion, Vector3};
use shield3d_f64::query;
use shield3d_f64::shape::Ellipsoid;

#[test]
fn identity_shield_is_the_unit_ball() {
    let shield = Ellipsoid::new(na::Matrix4::identity()).unwrap();
    let mut rng = oorandom::Rand64::new(3);

    for _ in 0..1000 {
        let pt = Point3::new(
            rng.rand_float() * 3.0 - 1.5,
            rng.rand_float() * 3.0 - 1.5,
            rng.rand_float() * 3.0 - 1.5,
        );
        assert_eq!(
            query::point_in_ellipsoid(&shield, &pt),
            pt.coords.norm_squared() <= 1.0
        );
    }
}

#[test]
fn closest_point_lies_on_the_surface() {
    let shield = Ellipsoid::from_center_axes(
        Point3::new(3.0, -1.0, 2.0),
        Vector3::new(5.0, 2.0, 3.0),
        &UnitQuaternion::from_euler_angles(0.4, -0.3, 1.2),
    )
    .unwrap();
    let mut rng = oorandom::Rand64::new(11);

    for _ in 0..500 {
        let pt = Point3::new(
            rng.rand_float() * 30.0 - 15.0,
            rng.rand_float() * 30.0 - 15.0,
            rng.rand_float() * 30.0 - 15.0,
        );
        let closest = query::closest_point_on_ellipsoid(&shield, &pt);
        assert_relative_eq!(shield.local_norm_squared(&closest), 1.0, epsilon = 1.0e-9);

        let (signed, with_point) = query::signed_distance_and_closest_point(&shield, &pt);
        assert_relative_eq!(with_point, closest, epsilon = 1.0e-9);
        assert_relative_eq!(signed.abs(), query::distance_to_ellipsoid(&shield, &pt), epsilon = 1.0e-9);
        assert_eq!(signed < 0.0, shield.local_norm_squared(&pt) < 1.0);
    }
}

#[test]
fn shield_center_projects_on_local_x_axis() {
    let shield = Ellipsoid::from_center_axes(
        Point3::new(1.0, 2.0, 3.0),
        Vector3::new(4.0, 2.0, 1.0),
        &UnitQuaternion::identity(),
    )
    .unwrap();
    let closest = query::closest_point_on_ellipsoid(&shield, &Point3::new(1.0, 2.0, 3.0));
    assert_relative_eq!(closest, Point3::new(5.0, 2.0, 3.0), epsilon = 1.0e-9);
    assert_relative_eq!(
        query::signed_distance_to_ellipsoid(&shield, &Point3::new(1.0, 2.0, 3.0)),
        -4.0,
        epsilon = 1.0e-9
    );
}
