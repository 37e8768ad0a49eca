use crate::error::{Result, VolumeError};

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Physical size of one voxel along each axis.
///
/// Defaults to 1.0 per axis for uncalibrated volumes. A zero component is
/// not rejected: it yields a zero calibrated volume and therefore a
/// non-finite connectivity density, which is reported as such.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelSize(Vector3);

impl VoxelSize {
    /// Creates a voxel size from per-axis physical extents.
    #[must_use]
    pub fn new(u: f64, v: f64, w: f64) -> Self {
        Self(Vector3::new(u, v, w))
    }

    /// Creates a voxel size with the same physical extent along every axis.
    #[must_use]
    pub fn isotropic(size: f64) -> Self {
        Self::new(size, size, size)
    }

    /// Physical extent along the first axis.
    #[must_use]
    pub fn u(&self) -> f64 {
        self.0.x
    }

    /// Physical extent along the second axis.
    #[must_use]
    pub fn v(&self) -> f64 {
        self.0.y
    }

    /// Physical extent along the third axis.
    #[must_use]
    pub fn w(&self) -> f64 {
        self.0.z
    }

    /// Physical volume of a single voxel.
    #[must_use]
    pub fn element_volume(&self) -> f64 {
        self.0.x * self.0.y * self.0.z
    }
}

impl Default for VoxelSize {
    fn default() -> Self {
        Self::isotropic(1.0)
    }
}

/// An axis-aligned 3D grid of boolean voxels with a physical calibration.
///
/// The grid is addressed by signed integer coordinates; any read outside
/// `[0, U) × [0, V) × [0, W)` returns `false`, so the volume behaves as if
/// embedded in an infinite background. This zero-extension is relied on by
/// every neighborhood test in the measurement code, which never needs to
/// special-case the grid boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct BitVolume {
    size: [i64; 3],
    voxel_size: VoxelSize,
    data: Vec<bool>,
}

impl BitVolume {
    /// Creates an all-background volume with the given extents.
    #[must_use]
    pub fn new(u_size: usize, v_size: usize, w_size: usize) -> Self {
        let size = [u_size as i64, v_size as i64, w_size as i64];
        Self {
            size,
            voxel_size: VoxelSize::default(),
            data: vec![false; u_size * v_size * w_size],
        }
    }

    /// Creates a volume from raw extents and voxel data in `u`-fastest order.
    ///
    /// This is the ingestion point for images coming from the outside world,
    /// and the only place dimensionality is checked.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::NotThreeDimensional`] unless exactly three
    /// extents are given, and [`VolumeError::DataLengthMismatch`] if the
    /// data length does not equal the product of the extents.
    pub fn from_raw(extents: &[usize], data: Vec<bool>) -> Result<Self> {
        let [u_size, v_size, w_size]: [usize; 3] = extents
            .try_into()
            .map_err(|_| VolumeError::NotThreeDimensional(extents.len()))?;

        let expected = u_size * v_size * w_size;
        if data.len() != expected {
            return Err(VolumeError::DataLengthMismatch {
                expected,
                actual: data.len(),
            }
            .into());
        }

        Ok(Self {
            size: [u_size as i64, v_size as i64, w_size as i64],
            voxel_size: VoxelSize::default(),
            data,
        })
    }

    /// Sets the physical calibration of this volume.
    #[must_use]
    pub fn with_voxel_size(mut self, voxel_size: VoxelSize) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    /// Number of voxels along the first axis.
    #[must_use]
    pub fn u_size(&self) -> i64 {
        self.size[0]
    }

    /// Number of voxels along the second axis.
    #[must_use]
    pub fn v_size(&self) -> i64 {
        self.size[1]
    }

    /// Number of voxels along the third axis.
    #[must_use]
    pub fn w_size(&self) -> i64 {
        self.size[2]
    }

    /// The physical size of one voxel.
    #[must_use]
    pub fn voxel_size(&self) -> VoxelSize {
        self.voxel_size
    }

    /// Total number of voxels in the grid.
    #[must_use]
    pub fn voxel_count(&self) -> i64 {
        self.size[0] * self.size[1] * self.size[2]
    }

    /// Calibrated physical volume of the whole grid.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn calibrated_volume(&self) -> f64 {
        self.voxel_count() as f64 * self.voxel_size.element_volume()
    }

    /// Reads the voxel at `(u, v, w)`, zero-extending out-of-range reads.
    #[must_use]
    pub fn get(&self, u: i64, v: i64, w: i64) -> bool {
        match self.index(u, v, w) {
            Some(i) => self.data[i],
            None => false,
        }
    }

    /// Writes the voxel at `(u, v, w)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid; unlike reads, writes
    /// outside the sampled interval have no meaning.
    pub fn set(&mut self, u: i64, v: i64, w: i64, value: bool) {
        let Some(i) = self.index(u, v, w) else {
            panic!("coordinate ({u}, {v}, {w}) is outside the volume");
        };
        self.data[i] = value;
    }

    #[allow(clippy::cast_sign_loss)]
    fn index(&self, u: i64, v: i64, w: i64) -> Option<usize> {
        let [u_size, v_size, w_size] = self.size;
        if u < 0 || v < 0 || w < 0 || u >= u_size || v >= v_size || w >= w_size {
            return None;
        }
        Some(((w * v_size + v) * u_size + u) as usize)
    }
}
