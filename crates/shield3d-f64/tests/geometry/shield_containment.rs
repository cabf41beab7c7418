use na::{Point3, UnitQuaternion, Vector3};
use shield3d_f64::bounding_volume::Aabb;
use shield3d_f64::query::containment;
use shield3d_f64::shape::{Ellipsoid, OrientedBox};

fn shield() -> Ellipsoid {
    Ellipsoid::from_center_axes(
        Point3::new(0.0, 5.0, 0.0),
        Vector3::new(20.0, 10.0, 15.0),
        &UnitQuaternion::from_euler_angles(0.0, 0.5, 0.0),
    )
    .unwrap()
}

#[test]
fn all_corners_in_shield_iff_count_is_eight() {
    let shield = shield();
    let mut rng = oorandom::Rand64::new(5);
    let mut corners = [Point3::origin(); 8];

    for _ in 0..1000 {
        let center = Point3::new(
            rng.rand_float() * 50.0 - 25.0,
            rng.rand_float() * 30.0 - 10.0,
            rng.rand_float() * 40.0 - 20.0,
        );
        let half_extents = Vector3::new(
            rng.rand_float() * 5.0,
            rng.rand_float() * 5.0,
            rng.rand_float() * 5.0,
        );
        let aabb = Aabb::from_half_extents(center, half_extents);

        let count = containment::corners_in_shield_count(&aabb, &shield, &mut corners);
        assert_eq!(
            containment::all_aabb_in_shield(&aabb, &shield, &mut corners),
            count == 8
        );

        let partial = containment::not_all_corners_in_shield(&aabb, &shield, &mut corners);
        assert!(partial <= count);
        assert_eq!(partial == 0, count == 0);

        let near = containment::corners_near_shield(&aabb, &shield, &mut corners);
        assert!(near >= count);

        let with_center = containment::corner_or_center_in_shield(&aabb, &shield, &mut corners, false);
        assert!(with_center == count || with_center == count + 1);
        let first = containment::corner_or_center_in_shield(&aabb, &shield, &mut corners, true);
        assert_eq!(first, with_center.min(1));
    }
}

#[test]
fn obb_tests_agree_with_each_other() {
    let shield = shield();
    let mut rng = oorandom::Rand64::new(8);
    let mut corners = [Point3::origin(); 8];
    let mut points = [Point3::origin(); 9];

    for _ in 0..1000 {
        let obb = OrientedBox::new(
            Point3::new(
                rng.rand_float() * 50.0 - 25.0,
                rng.rand_float() * 30.0 - 10.0,
                rng.rand_float() * 40.0 - 20.0,
            ),
            Vector3::new(
                rng.rand_float() * 5.0,
                rng.rand_float() * 5.0,
                rng.rand_float() * 5.0,
            ),
            UnitQuaternion::from_euler_angles(
                rng.rand_float() * 6.0,
                rng.rand_float() * 6.0,
                rng.rand_float() * 6.0,
            ),
        );

        let count = containment::obb_corners_in_shield_count(&obb, &shield, &mut corners);
        assert_eq!(
            containment::obb_corners_in_shield(&obb, &shield, &mut corners, false),
            count == 8
        );
        assert_eq!(
            containment::obb_corners_in_shield(&obb, &shield, &mut corners, true),
            count > 0
        );

        let nine = containment::obb_points_in_shield(&obb, &shield, &mut points);
        let center_inside = containment::point_in_shield(&obb.center, &shield) as usize;
        assert_eq!(nine, count + center_inside);
    }
}

#[test]
fn shield_pair_samples() {
    let a = Ellipsoid::from_center_axes(Point3::origin(), Vector3::repeat(10.0), &UnitQuaternion::identity())
        .unwrap();
    let b = Ellipsoid::from_center_axes(
        Point3::new(15.0, 0.0, 0.0),
        Vector3::repeat(10.0),
        &UnitQuaternion::identity(),
    )
    .unwrap();

    // Points along the x axis of each shield surface.
    let verts_a: Vec<_> = (0..8)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::FRAC_PI_4;
            Point3::new(10.0 * angle.cos(), 10.0 * angle.sin(), 0.0)
        })
        .collect();
    let verts_b: Vec<_> = verts_a
        .iter()
        .map(|pt| pt + Vector3::new(15.0, 0.0, 0.0))
        .collect();

    let mut inside = Vec::new();
    containment::shield_pair_points_inside(&verts_a, &a, &verts_b, &b, &mut inside);

    // Only the vertices facing the other shield are inside of it.
    assert_eq!(inside.len(), 2);
    assert_relative_eq!(inside[0], Point3::new(10.0, 0.0, 0.0), epsilon = 1.0e-9);
    assert_relative_eq!(inside[1], Point3::new(5.0, 0.0, 0.0), epsilon = 1.0e-9);
}

#[test]
fn closest_vert_and_triangle() {
    let mut rng = oorandom::Rand64::new(77);
    let verts: Vec<_> = (0..162)
        .map(|_| {
            Point3::new(
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() * 2.0 - 1.0,
            )
        })
        .collect();

    for _ in 0..100 {
        let pos = Point3::new(
            rng.rand_float() * 4.0 - 2.0,
            rng.rand_float() * 4.0 - 2.0,
            rng.rand_float() * 4.0 - 2.0,
        );

        let brute = verts
            .iter()
            .copied()
            .min_by(|a, b| {
                na::distance_squared(a, &pos)
                    .partial_cmp(&na::distance_squared(b, &pos))
                    .unwrap()
            })
            .unwrap();
        assert_eq!(containment::closest_vert(&verts, &pos, None), Some(brute));

        let tri = containment::closest_triangle(&verts, &pos);
        assert_eq!(tri % 3, 0);
        assert!(tri + 2 < verts.len());
    }
}
