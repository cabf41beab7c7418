use na::{Point3, Vector3};
use shield3d_f64::query::voxel::{self, VoxelReadBuffer, VoxelStorage, VoxelStorageError};

/// A bounded voxel block of uniform density, offset in the world.
struct UniformStorage {
    density: u8,
    corner: Point3<f64>,
    size: i32,
}

impl VoxelStorage for UniformStorage {
    fn is_closed(&self) -> bool {
        false
    }

    fn world_to_voxel(&self, pt: &Point3<f64>) -> Point3<f64> {
        Point3::from(pt - self.corner)
    }

    fn read_range(
        &self,
        min: &Vector3<i32>,
        max: &Vector3<i32>,
        buffer: &mut VoxelReadBuffer,
    ) -> Result<(), VoxelStorageError> {
        if min.iter().any(|c| *c < 0) || max.iter().any(|c| *c >= self.size) {
            return Err(VoxelStorageError::OutOfBounds { min: *min, max: *max });
        }

        buffer.fill(self.density);
        Ok(())
    }
}

fn sphere_samples(center: Point3<f64>, radius: f64) -> Vec<Point3<f64>> {
    let mut pts = Vec::new();

    for i in 0..9 {
        for j in 0..18 {
            let theta = (i as f64 + 0.5) * std::f64::consts::PI / 9.0;
            let phi = j as f64 * std::f64::consts::PI / 9.0;
            pts.push(
                center
                    + Vector3::new(
                        theta.sin() * phi.cos(),
                        theta.sin() * phi.sin(),
                        theta.cos(),
                    ) * radius,
            );
        }
    }

    pts
}

#[test]
fn uniform_terrain() {
    let samples = sphere_samples(Point3::new(50.0, 50.0, 50.0), 10.0);
    assert_eq!(samples.len(), 162);
    let mut buffer = VoxelReadBuffer::new();

    let solid = UniformStorage {
        density: 255,
        corner: Point3::origin(),
        size: 100,
    };
    assert!(voxel::voxel_contact(&solid, &samples, &mut buffer));
    let center = voxel::voxel_contact_center(&solid, &samples, &mut buffer).unwrap();
    assert_relative_eq!(center, Point3::new(50.0, 50.0, 50.0), epsilon = 1.0e-6);

    let air = UniformStorage {
        density: 0,
        corner: Point3::origin(),
        size: 100,
    };
    assert!(!voxel::voxel_contact(&air, &samples, &mut buffer));
    assert_eq!(voxel::voxel_contact_center(&air, &samples, &mut buffer), None);
}

#[test]
fn threshold_is_inclusive() {
    let samples = [Point3::new(10.3, 10.6, 10.1)];
    let mut buffer = VoxelReadBuffer::new();
    let storage = UniformStorage {
        density: 127,
        corner: Point3::origin(),
        size: 100,
    };
    assert!(voxel::voxel_contact(&storage, &samples, &mut buffer));

    let strict = voxel::VoxelSamplerOptions {
        solid_threshold: 128.0,
    };
    assert!(!voxel::voxel_contact_with_options(
        &storage,
        &samples,
        &mut buffer,
        &strict
    ));
}

#[test]
fn reads_out_of_storage_bounds_mean_no_contact() {
    let samples = sphere_samples(Point3::new(5.0, 5.0, 5.0), 10.0);
    let mut buffer = VoxelReadBuffer::new();
    let storage = UniformStorage {
        density: 255,
        corner: Point3::new(-100.0, -100.0, -100.0),
        size: 50,
    };
    assert!(!voxel::voxel_contact(&storage, &samples, &mut buffer));
    assert_eq!(voxel::voxel_contact_center(&storage, &samples, &mut buffer), None);
}
