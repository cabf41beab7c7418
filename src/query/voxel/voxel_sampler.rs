use crate::math::{Point, Real, Vector};
use crate::query::voxel::{VoxelReadBuffer, VoxelStorage, VoxelStorageError};

/// Options of the voxel contact sampler.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VoxelSamplerOptions {
    /// Interpolated densities at or above this value are solid.
    pub solid_threshold: Real,
}

impl Default for VoxelSamplerOptions {
    fn default() -> Self {
        VoxelSamplerOptions {
            solid_threshold: 127.0,
        }
    }
}

/// Trilinear interpolation of the densities at the corners of a unit cube.
///
/// `cube[x + 2 * y + 4 * z]` is the density at the corner `(x, y, z)`. Interpolation runs
/// along `x` first, then `y`, then `z`.
pub fn trilinear(cube: &[Real; 8], frac: &Vector<Real>) -> Real {
    let c00 = cube[0] + (cube[1] - cube[0]) * frac.x;
    let c10 = cube[2] + (cube[3] - cube[2]) * frac.x;
    let c01 = cube[4] + (cube[5] - cube[4]) * frac.x;
    let c11 = cube[6] + (cube[7] - cube[6]) * frac.x;

    let c0 = c00 + (c10 - c00) * frac.y;
    let c1 = c01 + (c11 - c01) * frac.y;

    c0 + (c1 - c0) * frac.z
}

/// Does any of `points` lie in solid terrain? Uses the default options.
#[inline]
pub fn voxel_contact<S: VoxelStorage + ?Sized>(
    storage: &S,
    points: &[Point<Real>],
    buffer: &mut VoxelReadBuffer,
) -> bool {
    voxel_contact_with_options(storage, points, buffer, &VoxelSamplerOptions::default())
}

/// Does any of `points` lie in solid terrain?
///
/// Sampling stops at the first solid point. A closed storage, or a storage failing to read,
/// reports no contact.
pub fn voxel_contact_with_options<S: VoxelStorage + ?Sized>(
    storage: &S,
    points: &[Point<Real>],
    buffer: &mut VoxelReadBuffer,
    options: &VoxelSamplerOptions,
) -> bool {
    let mut hit = false;
    let result = sample_solid_points(storage, points, buffer, options, |_| {
        hit = true;
        false
    });

    match result {
        Ok(()) => hit,
        Err(err) => {
            log_storage_error(&err);
            false
        }
    }
}

/// The average of the `points` lying in solid terrain. Uses the default options.
#[inline]
pub fn voxel_contact_center<S: VoxelStorage + ?Sized>(
    storage: &S,
    points: &[Point<Real>],
    buffer: &mut VoxelReadBuffer,
) -> Option<Point<Real>> {
    voxel_contact_center_with_options(storage, points, buffer, &VoxelSamplerOptions::default())
}

/// The average of the `points` lying in solid terrain.
///
/// Returns `None` if no point is solid, if the storage is closed, or if it fails to read.
pub fn voxel_contact_center_with_options<S: VoxelStorage + ?Sized>(
    storage: &S,
    points: &[Point<Real>],
    buffer: &mut VoxelReadBuffer,
    options: &VoxelSamplerOptions,
) -> Option<Point<Real>> {
    let mut sum = Vector::zeros();
    let mut count = 0usize;
    let result = sample_solid_points(storage, points, buffer, options, |pt| {
        sum += pt.coords;
        count += 1;
        true
    });

    if let Err(err) = result {
        log_storage_error(&err);
        return None;
    }

    if count == 0 {
        None
    } else {
        Some(Point::from(sum / count as Real))
    }
}

fn log_storage_error(err: &VoxelStorageError) {
    match err {
        VoxelStorageError::Closed => log::debug!("Voxel contact skipped: {}", err),
        _ => log::warn!("Voxel contact aborted: {}", err),
    }
}

/// Calls `on_solid` for each of `points` with a solid interpolated density, until it returns
/// `false`.
///
/// The 2x2x2 voxels around each point are read into `buffer`, which is only refreshed when the
/// point falls in a different base voxel than the previous one.
fn sample_solid_points<S, F>(
    storage: &S,
    points: &[Point<Real>],
    buffer: &mut VoxelReadBuffer,
    options: &VoxelSamplerOptions,
    mut on_solid: F,
) -> Result<(), VoxelStorageError>
where
    S: VoxelStorage + ?Sized,
    F: FnMut(&Point<Real>) -> bool,
{
    if storage.is_closed() {
        return Err(VoxelStorageError::Closed);
    }

    let mut loaded_base = None;

    for pt in points {
        let voxel = storage.world_to_voxel(pt);

        if !voxel.coords.iter().all(|c| c.is_finite()) {
            continue;
        }

        let floor = voxel.coords.map(|c| c.floor());

        // The base cell and its upper neighbor must both be addressable.
        if !floor
            .iter()
            .all(|c| *c >= i32::MIN as Real && *c < i32::MAX as Real)
        {
            continue;
        }

        let frac = voxel.coords - floor;
        let base = floor.map(|c| c as i32);

        if loaded_base != Some(base) {
            let top = base.add_scalar(1);
            buffer.resize(&base, &top);
            storage.read_range(&base, &top, buffer)?;
            loaded_base = Some(base);
        }

        let mut cube = [0.0; 8];

        for (i, val) in cube.iter_mut().enumerate() {
            *val = buffer.content(i & 1, (i >> 1) & 1, (i >> 2) & 1) as Real;
        }

        if trilinear(&cube, &frac) >= options.solid_threshold && !on_solid(pt) {
            break;
        }
    }

    Ok(())
}
