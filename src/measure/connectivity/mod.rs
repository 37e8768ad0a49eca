//! Connectivity estimation for trabecular structures.
//!
//! Connectivity is derived from the Euler characteristic of the binary
//! structure: χ is accumulated over 2×2×2 octants against a contribution
//! table, corrected for the artificial cut at the volume boundary, and
//! converted to a connectivity value and a calibrated density
//! (Odgaard A, Gundersen HJG (1993) Quantification of connectivity in
//! cancellous bone. Bone 14: 173-182).

mod correction;
mod euler;
mod euler_table;
mod octant;

pub use octant::Octant;

use crate::volume::BitVolume;

/// The results of a connectivity measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Characteristics {
    /// Euler characteristic χ of the structure as if floating in free
    /// space.
    pub euler_characteristic: f64,
    /// Δχ: the volume's own contribution to the Euler characteristic of
    /// the structure it was sampled from.
    pub delta_chi: f64,
    /// Connectivity estimate, `1 - Δχ`. Valid for a single connected
    /// structure; isolated particles and cavities bias it.
    pub connectivity: f64,
    /// Connectivity per calibrated unit volume. Non-finite when the grid
    /// has no physical volume.
    pub connectivity_density: f64,
}

/// Measures the connectivity of the foreground structure in a binary
/// volume.
///
/// The measurement is total: every binary volume, including empty and
/// zero-extent ones, yields a `Characteristics` record. Degenerate
/// calibrations surface as IEEE infinities or NaN in the density rather
/// than as errors.
#[derive(Debug, Default)]
pub struct Connectivity;

impl Connectivity {
    /// Creates a new `Connectivity` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the measurement.
    #[must_use]
    pub fn execute(&self, volume: &BitVolume) -> Characteristics {
        let euler_characteristic = euler::euler_characteristic(volume);
        let delta_chi = euler_characteristic - correction::edge_correction(volume);
        let connectivity = 1.0 - delta_chi;
        let connectivity_density = connectivity / volume.calibrated_volume();

        Characteristics {
            euler_characteristic,
            delta_chi,
            connectivity,
            connectivity_density,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phantom::WireFrameCuboid;
    use crate::volume::VoxelSize;
    use approx::assert_relative_eq;

    #[test]
    fn padded_wire_frame_cuboid_regression() {
        // A 10x10x10 wire frame carries five independent loops, so
        // χ = 1 - 5 = -4 and connectivity = 5. With one layer of padding
        // nothing touches the boundary and Δχ equals χ.
        let volume = WireFrameCuboid::new(10, 10, 10)
            .with_padding(1)
            .with_voxel_size(VoxelSize::isotropic(0.2))
            .execute();

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.euler_characteristic, -4.0, epsilon = 1e-12);
        assert_relative_eq!(results.delta_chi, -4.0, epsilon = 1e-12);
        assert_relative_eq!(results.connectivity, 5.0, epsilon = 1e-12);

        let expected_density = 5.0 / (12.0 * 12.0 * 12.0 * 0.2 * 0.2 * 0.2);
        assert_relative_eq!(results.connectivity_density, expected_density, epsilon = 1e-12);
    }

    #[test]
    fn unpadded_wire_frame_engages_the_boundary_correction() {
        // The same frame flush with the grid boundary: the free-space
        // characteristic is unchanged, but the twelve struts now lie on
        // the boundary edges and are shared with abutting volumes, so the
        // correction reclaims two of the five loops.
        let volume = WireFrameCuboid::new(10, 10, 10)
            .with_voxel_size(VoxelSize::isotropic(0.2))
            .execute();

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.euler_characteristic, -4.0, epsilon = 1e-12);
        assert_relative_eq!(results.delta_chi, -2.0, epsilon = 1e-12);
        assert_relative_eq!(results.connectivity, 3.0, epsilon = 1e-12);
        assert_relative_eq!(results.connectivity_density, 3.0 / 8.0, epsilon = 1e-12);
    }

    #[test]
    fn interior_voxel_contributes_a_whole_component() {
        let mut volume = BitVolume::new(3, 3, 3);
        volume.set(1, 1, 1, true);

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.euler_characteristic, 1.0);
        assert_relative_eq!(results.delta_chi, 1.0);
        assert_relative_eq!(results.connectivity, 0.0);
    }

    #[test]
    fn corner_voxel_contributes_an_eighth_of_a_component() {
        let mut volume = BitVolume::new(3, 3, 3);
        volume.set(0, 0, 0, true);

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.euler_characteristic, 1.0);
        assert_relative_eq!(results.delta_chi, 1.0 / 8.0);
        assert_relative_eq!(results.connectivity, 7.0 / 8.0);
    }

    #[test]
    fn interior_ring_has_unit_connectivity() {
        let mut volume = BitVolume::new(5, 5, 5);
        for v in 1..4 {
            for u in 1..4 {
                if (u, v) != (2, 2) {
                    volume.set(u, v, 2, true);
                }
            }
        }

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.euler_characteristic, 0.0);
        assert_relative_eq!(results.delta_chi, 0.0);
        assert_relative_eq!(results.connectivity, 1.0);
    }

    #[test]
    fn empty_volume_yields_trivial_characteristics() {
        let volume = BitVolume::new(4, 4, 4);

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.euler_characteristic, 0.0);
        assert_relative_eq!(results.delta_chi, 0.0);
        assert_relative_eq!(results.connectivity, 1.0);
        assert_relative_eq!(results.connectivity_density, 1.0 / 64.0);
    }

    #[test]
    fn zero_extent_volume_has_non_finite_density() {
        let volume = BitVolume::new(0, 4, 4);

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.connectivity, 1.0);
        assert!(results.connectivity_density.is_infinite());
    }

    #[test]
    fn density_scales_with_the_calibration() {
        let mut volume =
            BitVolume::new(5, 5, 5).with_voxel_size(VoxelSize::new(0.5, 0.5, 2.0));
        for v in 1..4 {
            for u in 1..4 {
                if (u, v) != (2, 2) {
                    volume.set(u, v, 2, true);
                }
            }
        }

        let results = Connectivity::new().execute(&volume);

        assert_relative_eq!(results.connectivity, 1.0);
        assert_relative_eq!(results.connectivity_density, 1.0 / 62.5, epsilon = 1e-12);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let volume = WireFrameCuboid::new(6, 7, 8).with_padding(2).execute();
        let op = Connectivity::new();

        let first = op.execute(&volume);
        let second = op.execute(&volume);

        assert_eq!(first, second);
    }
}
