use crate::volume::{BitVolume, VoxelSize};

/// Creates a filled cuboid: one component, no loops, no cavities.
pub struct SolidCuboid {
    size: [usize; 3],
    padding: usize,
    voxel_size: VoxelSize,
}

impl SolidCuboid {
    /// Creates a new `SolidCuboid` operation with the given extents, no
    /// padding and unit calibration.
    #[must_use]
    pub fn new(u_size: usize, v_size: usize, w_size: usize) -> Self {
        Self {
            size: [u_size, v_size, w_size],
            padding: 0,
            voxel_size: VoxelSize::default(),
        }
    }

    /// Sets the number of background layers around the cuboid.
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the physical calibration of the generated volume.
    #[must_use]
    pub fn with_voxel_size(mut self, voxel_size: VoxelSize) -> Self {
        self.voxel_size = voxel_size;
        self
    }

    /// Executes the operation, filling the cuboid in a fresh volume.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn execute(&self) -> BitVolume {
        let [u_len, v_len, w_len] = self.size;
        let mut volume = BitVolume::new(
            u_len + 2 * self.padding,
            v_len + 2 * self.padding,
            w_len + 2 * self.padding,
        )
        .with_voxel_size(self.voxel_size);

        let padding = self.padding as i64;
        for w in padding..padding + w_len as i64 {
            for v in padding..padding + v_len as i64 {
                for u in padding..padding + u_len as i64 {
                    volume.set(u, v, w, true);
                }
            }
        }

        volume
    }
}
