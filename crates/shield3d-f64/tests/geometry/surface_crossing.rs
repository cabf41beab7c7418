use na::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use shield3d_f64::query::{self, EdgeSolverOptions};
use shield3d_f64::shape::{Ellipsoid, OrientedBox, OBB_EDGES};

fn distance_to_line(pt: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    let dir = (b - a).normalize();
    let ap = pt - a;
    (ap - dir * ap.dot(&dir)).norm()
}

#[test]
fn single_crossing_edge_of_a_thin_box() {
    let shield = Ellipsoid::from_center_axes(Point3::origin(), Vector3::repeat(10.0), &UnitQuaternion::identity())
        .unwrap();
    let obb = OrientedBox::new(
        Point3::new(0.0, 7.2, 7.2),
        Vector3::new(20.0, 0.4, 0.4),
        UnitQuaternion::identity(),
    );
    let mut points = [Point3::origin(); 9];
    let hit = query::obb_surface_crossing(&obb, &shield, &mut points).unwrap();

    let expected_x = -(100.0_f64 - 2.0 * 6.8 * 6.8).sqrt();
    assert_relative_eq!(hit, Point3::new(expected_x, 6.8, 6.8), epsilon = 1.0e-6);
    assert_relative_eq!(distance_to_line(&hit, &points[0], &points[1]), 0.0, epsilon = 1.0e-6);
}

#[test]
fn crossing_follows_rigid_motions() {
    let shield = Ellipsoid::from_center_axes(
        Point3::origin(),
        Vector3::new(1.0, 1.0, 1.0),
        &UnitQuaternion::identity(),
    )
    .unwrap();
    let obb = OrientedBox::new(
        Point3::new(0.0, 0.72, 0.72),
        Vector3::new(2.0, 0.04, 0.04),
        UnitQuaternion::identity(),
    );
    let mut points = [Point3::origin(); 9];
    let hit = query::obb_surface_crossing(&obb, &shield, &mut points).unwrap();

    let pos = Isometry3::from_parts(
        Translation3::new(5.0, -3.0, 2.0),
        UnitQuaternion::from_euler_angles(0.7, -0.2, 1.9),
    );
    let moved_shield =
        Ellipsoid::from_center_axes(pos * Point3::origin(), Vector3::repeat(1.0), &pos.rotation).unwrap();
    let moved_obb = OrientedBox::new(pos * obb.center, obb.half_extents, pos.rotation);
    let moved_hit = query::obb_surface_crossing(&moved_obb, &moved_shield, &mut points).unwrap();

    assert_relative_eq!(moved_hit, pos * hit, epsilon = 1.0e-6);
}

#[test]
fn random_edge_hits_lie_on_the_surface() {
    let shield = Ellipsoid::from_center_axes(
        Point3::new(1.0, 2.0, 3.0),
        Vector3::new(6.0, 3.0, 2.0),
        &UnitQuaternion::from_euler_angles(0.1, 0.8, -0.4),
    )
    .unwrap();
    let mut rng = oorandom::Rand64::new(99);
    let mut points = [Point3::origin(); 9];
    let mut edge_hits = 0;

    for _ in 0..2000 {
        let obb = OrientedBox::new(
            Point3::new(
                rng.rand_float() * 20.0 - 9.0,
                rng.rand_float() * 20.0 - 8.0,
                rng.rand_float() * 20.0 - 7.0,
            ),
            Vector3::new(
                rng.rand_float() * 3.0 + 0.1,
                rng.rand_float() * 0.5 + 0.1,
                rng.rand_float() * 0.5 + 0.1,
            ),
            UnitQuaternion::from_euler_angles(
                rng.rand_float() * 6.0,
                rng.rand_float() * 6.0,
                rng.rand_float() * 6.0,
            ),
        );

        let hit = match query::obb_surface_crossing(&obb, &shield, &mut points) {
            Some(hit) => hit,
            None => continue,
        };

        if points.iter().any(|pt| shield.contains_point(pt)) {
            assert!(points.contains(&hit));
            continue;
        }

        edge_hits += 1;
        assert_relative_eq!(shield.local_norm_squared(&hit), 1.0, epsilon = 1.0e-6);
        assert!(OBB_EDGES
            .iter()
            .any(|(i, j)| distance_to_line(&hit, &points[*i], &points[*j]) < 1.0e-6));
    }

    assert!(edge_hits > 0);
}

#[test]
fn zero_reach_only_reports_inside_points() {
    let shield = Ellipsoid::from_center_axes(Point3::origin(), Vector3::repeat(1.0), &UnitQuaternion::identity())
        .unwrap();
    let obb = OrientedBox::new(
        Point3::new(0.0, 0.72, 0.72),
        Vector3::new(2.0, 0.04, 0.04),
        UnitQuaternion::identity(),
    );
    let mut points = [Point3::origin(); 9];
    let options = EdgeSolverOptions { reach_factor: 0.0 };
    assert_eq!(
        query::obb_surface_crossing_with_options(&obb, &shield, &mut points, &options),
        None
    );
}
