use crate::volume::{BitVolume, VoxelSize};

/// Creates a wire-frame cuboid: the twelve edges of a cuboid drawn one
/// voxel thick.
///
/// The frame carries five independent loops, so its free-space Euler
/// characteristic is -4 and its connectivity is 5 regardless of its
/// extents. Padding inserts background between the frame and the grid
/// boundary; without it the frame lies flush with the boundary.
pub struct WireFrameCuboid {
    size: [usize; 3],
    padding: usize,
    voxel_size: VoxelSize,
}

impl WireFrameCuboid {
    /// Creates a new `WireFrameCuboid` operation with the given frame
    /// extents, no padding and unit calibration.
    #[must_use]
    pub fn new(u_size: usize, v_size: usize, w_size: usize) -> Self {
        Self {
            size: [u_size, v_size, w_size],
            padding: 0,
            voxel_size: VoxelSize::default(),
        }
    }

    /// Sets the number of background layers around the frame.
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

    /// Executes the operation, drawing the frame into a fresh volume.
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

        if u_len == 0 || v_len == 0 || w_len == 0 {
            return volume;
        }

        let padding = self.padding as i64;
        let u1 = padding + u_len as i64 - 1;
        let v1 = padding + v_len as i64 - 1;
        let w1 = padding + w_len as i64 - 1;

        for w in [padding, w1] {
            for v in [padding, v1] {
                for u in padding..=u1 {
                    volume.set(u, v, w, true);
                }
            }
            for u in [padding, u1] {
                for v in padding..=v1 {
                    volume.set(u, v, w, true);
                }
            }
        }
        for v in [padding, v1] {
            for u in [padding, u1] {
                for w in padding..=w1 {
                    volume.set(u, v, w, true);
                }
            }
        }

        volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foreground_count(volume: &BitVolume) -> i64 {
        let mut count = 0;
        for w in 0..volume.w_size() {
            for v in 0..volume.v_size() {
                for u in 0..volume.u_size() {
                    count += i64::from(volume.get(u, v, w));
                }
            }
        }
        count
    }

    #[test]
    fn frame_has_the_expected_voxel_count() {
        // 8 corners plus 12 edges of 8 interior voxels each.
        let volume = WireFrameCuboid::new(10, 10, 10).execute();
        assert_eq!(foreground_count(&volume), 8 + 12 * 8);
    }

    #[test]
    fn padding_grows_the_grid_and_insets_the_frame() {
        let volume = WireFrameCuboid::new(10, 10, 10).with_padding(1).execute();

        assert_eq!(volume.u_size(), 12);
        assert_eq!(volume.v_size(), 12);
        assert_eq!(volume.w_size(), 12);

        assert!(volume.get(1, 1, 1));
        assert!(volume.get(10, 10, 10));
        assert!(!volume.get(0, 0, 0));
        assert!(!volume.get(11, 11, 11));

        // The padding shell is entirely background.
        for v in 0..12 {
            for u in 0..12 {
                assert!(!volume.get(u, v, 0));
                assert!(!volume.get(u, v, 11));
            }
        }
    }

    #[test]
    fn faces_stay_hollow() {
        let volume = WireFrameCuboid::new(6, 6, 6).execute();
        assert!(!volume.get(2, 2, 0));
        assert!(!volume.get(2, 0, 2));
        assert!(!volume.get(0, 2, 2));
        assert!(!volume.get(2, 2, 2));
    }

    #[test]
    fn anisotropic_extents_are_respected() {
        let volume = WireFrameCuboid::new(4, 5, 6).execute();
        assert_eq!(volume.u_size(), 4);
        assert_eq!(volume.v_size(), 5);
        assert_eq!(volume.w_size(), 6);
        assert!(volume.get(3, 4, 5));
    }

    #[test]
    fn zero_extent_frame_is_empty() {
        let volume = WireFrameCuboid::new(0, 5, 5).with_padding(1).execute();
        assert_eq!(foreground_count(&volume), 0);
        assert_eq!(volume.u_size(), 2);
    }

    #[test]
    fn calibration_is_carried_into_the_volume() {
        let volume = WireFrameCuboid::new(3, 3, 3)
            .with_voxel_size(VoxelSize::isotropic(0.2))
            .execute();
        approx::assert_relative_eq!(volume.voxel_size().u(), 0.2);
    }
}
