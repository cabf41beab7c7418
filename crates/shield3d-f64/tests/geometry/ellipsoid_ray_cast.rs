use na::{Point3, UnitQuaternion, Vector3};
use shield3d_f64::query::{self, Ray};
use shield3d_f64::shape::Ellipsoid;

fn random_shield(rng: &mut oorandom::Rand64) -> Ellipsoid {
    let center = Point3::new(
        rng.rand_float() * 20.0 - 10.0,
        rng.rand_float() * 20.0 - 10.0,
        rng.rand_float() * 20.0 - 10.0,
    );
    let axes = Vector3::new(
        rng.rand_float() * 4.0 + 0.5,
        rng.rand_float() * 4.0 + 0.5,
        rng.rand_float() * 4.0 + 0.5,
    );
    let rotation = UnitQuaternion::from_euler_angles(
        rng.rand_float() * 6.0,
        rng.rand_float() * 6.0,
        rng.rand_float() * 6.0,
    );
    Ellipsoid::from_center_axes(center, axes, &rotation).unwrap()
}

#[test]
fn ray_distance_matches_known_surface_point() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..500 {
        let shield = random_shield(&mut rng);

        // A surface point, and a ray origin outside of the shield aimed at it.
        let local_dir = Vector3::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        );
        let local_dir = match local_dir.try_normalize(1.0e-3) {
            Some(dir) => dir,
            None => continue,
        };
        let surface = shield.to_world(&Point3::from(local_dir));
        let origin = shield.to_world(&Point3::from(local_dir * 3.0));

        let dist = query::ray_ellipsoid_distance(&shield, &Ray::new(origin, surface - origin))
            .unwrap_or_else(|| panic!("Ray from {origin} did not hit its target {surface}"));
        assert_relative_eq!(dist, na::distance(&origin, &surface), max_relative = 1.0e-5);
    }
}

#[test]
fn rays_from_inside_or_away_report_nothing() {
    let shield =
        Ellipsoid::from_center_axes(Point3::origin(), Vector3::new(3.0, 2.0, 1.0), &UnitQuaternion::identity())
            .unwrap();

    let inside = Ray::new(Point3::new(0.5, 0.0, 0.0), Vector3::x());
    assert_eq!(query::ray_ellipsoid_distance(&shield, &inside), None);

    let away = Ray::new(Point3::new(5.0, 0.0, 0.0), Vector3::x());
    assert_eq!(query::ray_ellipsoid_distance(&shield, &away), None);

    let still = Ray::new(Point3::new(5.0, 0.0, 0.0), Vector3::zeros());
    assert_eq!(query::ray_ellipsoid_distance(&shield, &still), None);

    let grazing_miss = Ray::new(Point3::new(-5.0, 0.0, 1.01), Vector3::x());
    assert_eq!(query::ray_ellipsoid_distance(&shield, &grazing_miss), None);
}
