use crate::math::{Point, Real, Vector};

/// Errors reported by a [`VoxelStorage`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum VoxelStorageError {
    /// The storage was closed and can no longer be read.
    #[error("the voxel storage is closed.")]
    Closed,
    /// The requested data is not loaded in memory.
    #[error("the voxel storage data is not loaded.")]
    Unloaded,
    /// The requested range exceeds the storage bounds.
    #[error("the voxel range {min:?} to {max:?} is out of the storage bounds.")]
    OutOfBounds {
        /// First voxel of the requested range.
        min: Vector<i32>,
        /// Last voxel of the requested range.
        max: Vector<i32>,
    },
}

/// Voxel density storage of the host world.
pub trait VoxelStorage {
    /// Is this storage closed?
    ///
    /// A closed storage is never read from.
    fn is_closed(&self) -> bool;

    /// Maps a world-space point to continuous voxel coordinates.
    ///
    /// The voxel with integer coordinates `v` covers the coordinates from `v` to `v + 1`.
    fn world_to_voxel(&self, pt: &Point<Real>) -> Point<Real>;

    /// Reads the densities of the voxels from `min` to `max`, both inclusive, into `buffer`.
    ///
    /// `buffer` has already been resized to that range by the caller.
    fn read_range(
        &self,
        min: &Vector<i32>,
        max: &Vector<i32>,
        buffer: &mut VoxelReadBuffer,
    ) -> Result<(), VoxelStorageError>;
}

/// A caller-owned staging buffer for voxel densities.
///
/// Densities are stored as bytes, `0` being empty and `255` full, in x-major order. They are
/// addressed relative to the first voxel of the range the buffer was last resized to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelReadBuffer {
    min: Vector<i32>,
    size: [usize; 3],
    content: Vec<u8>,
}

impl Default for VoxelReadBuffer {
    fn default() -> Self {
        VoxelReadBuffer {
            min: Vector::zeros(),
            size: [0; 3],
            content: Vec::new(),
        }
    }
}

impl VoxelReadBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes this buffer to hold the voxels from `min` to `max`, both inclusive.
    ///
    /// All densities are reset to `0`. The allocation is kept when large enough.
    pub fn resize(&mut self, min: &Vector<i32>, max: &Vector<i32>) {
        self.min = *min;

        for k in 0..3 {
            self.size[k] = max[k].saturating_sub(min[k]).saturating_add(1).max(0) as usize;
        }

        self.content.clear();
        self.content
            .resize(self.size[0] * self.size[1] * self.size[2], 0);
    }

    /// First voxel of the range covered by this buffer.
    #[inline]
    pub fn min(&self) -> &Vector<i32> {
        &self.min
    }

    /// Number of voxels along each axis.
    #[inline]
    pub fn size(&self) -> [usize; 3] {
        self.size
    }

    fn linear_index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        if x < self.size[0] && y < self.size[1] && z < self.size[2] {
            Some(x + self.size[0] * (y + self.size[1] * z))
        } else {
            None
        }
    }

    /// The density at the given offsets from [`Self::min`], or `0` out of the buffer bounds.
    #[inline]
    pub fn content(&self, x: usize, y: usize, z: usize) -> u8 {
        self.linear_index(x, y, z)
            .and_then(|i| self.content.get(i).copied())
            .unwrap_or(0)
    }

    /// Sets the density at the given offsets from [`Self::min`].
    ///
    /// Writes out of the buffer bounds are ignored.
    #[inline]
    pub fn set_content(&mut self, x: usize, y: usize, z: usize, value: u8) {
        if let Some(val) = self
            .linear_index(x, y, z)
            .and_then(|i| self.content.get_mut(i))
        {
            *val = value;
        }
    }

    /// Sets every density of this buffer to `value`.
    #[inline]
    pub fn fill(&mut self, value: u8) {
        self.content.iter_mut().for_each(|v| *v = value);
    }

    /// The raw densities, in x-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.content
    }

    /// The raw densities, in x-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.content
    }
}
