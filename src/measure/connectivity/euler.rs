//! Euler characteristic accumulation.
//!
//! Every lattice vertex of the grid is visited once as the maximal corner
//! of its octant, which makes the scan range `0..=size` along each axis:
//! stopping at `size - 1` would drop the vertices on the far boundary and
//! skew the characteristic of anything touching it. The octant's raw
//! pattern is reduced to a canonical representative through a priority
//! cascade keyed on the highest-numbered foreground neighbor, then resolved
//! against the contribution table. Contributions are summed as integers per
//! W-slice and divided by 8.0 only at the end: each physical cube corner is
//! shared by eight octants, and integer accumulation keeps the sum exact
//! across arbitrarily large volumes.

use rayon::prelude::*;

use super::euler_table::EULER_LUT;
use super::octant::Octant;
use crate::volume::BitVolume;

/// Computes the Euler characteristic of the structure as though it were
/// floating in free space, without boundary correction.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn euler_characteristic(volume: &BitVolume) -> f64 {
    let slices = usize::try_from(volume.w_size()).unwrap_or(0) + 1;
    let total: i64 = (0..slices)
        .into_par_iter()
        .map(|w| slice_contribution(volume, w as i64))
        .sum();

    total as f64 / 8.0
}

/// Sums the octant contributions of a single lattice W-slice.
///
/// Slice sums are plain integer additions, so any partitioning of the
/// slices reproduces the exact same characteristic.
pub(crate) fn slice_contribution(volume: &BitVolume, w: i64) -> i64 {
    let mut octant = Octant::new();
    let mut sum = 0;

    for v in 0..=volume.v_size() {
        for u in 0..=volume.u_size() {
            octant.sample(volume, u, v, w);
            sum += delta_euler(&octant);
        }
    }

    sum
}

/// Resolves one octant to its contribution.
///
/// The branch taken depends on the highest-numbered foreground neighbor
/// among 8, 7, 6, 5, 4, 3, 2; each branch maps the remaining neighbors onto
/// the bit layout of the canonical pattern that represents this octant's
/// topological class. The bit assignments are part of the published
/// classification and must match the contribution table exactly.
fn delta_euler(octant: &Octant) -> i64 {
    if octant.is_empty() {
        return 0;
    }

    let mut index: usize = 1;
    if octant.is_neighbor_foreground(8) {
        if octant.is_neighbor_foreground(1) {
            index |= 128;
        }
        if octant.is_neighbor_foreground(2) {
            index |= 64;
        }
        if octant.is_neighbor_foreground(3) {
            index |= 32;
        }
        if octant.is_neighbor_foreground(4) {
            index |= 16;
        }
        if octant.is_neighbor_foreground(5) {
            index |= 8;
        }
        if octant.is_neighbor_foreground(6) {
            index |= 4;
        }
        if octant.is_neighbor_foreground(7) {
            index |= 2;
        }
    } else if octant.is_neighbor_foreground(7) {
        if octant.is_neighbor_foreground(2) {
            index |= 128;
        }
        if octant.is_neighbor_foreground(4) {
            index |= 64;
        }
        if octant.is_neighbor_foreground(1) {
            index |= 32;
        }
        if octant.is_neighbor_foreground(3) {
            index |= 16;
        }
        if octant.is_neighbor_foreground(6) {
            index |= 8;
        }
        if octant.is_neighbor_foreground(5) {
            index |= 2;
        }
    } else if octant.is_neighbor_foreground(6) {
        if octant.is_neighbor_foreground(3) {
            index |= 128;
        }
        if octant.is_neighbor_foreground(1) {
            index |= 64;
        }
        if octant.is_neighbor_foreground(4) {
            index |= 32;
        }
        if octant.is_neighbor_foreground(2) {
            index |= 16;
        }
        if octant.is_neighbor_foreground(5) {
            index |= 4;
        }
    } else if octant.is_neighbor_foreground(5) {
        if octant.is_neighbor_foreground(4) {
            index |= 128;
        }
        if octant.is_neighbor_foreground(3) {
            index |= 64;
        }
        if octant.is_neighbor_foreground(2) {
            index |= 32;
        }
        if octant.is_neighbor_foreground(1) {
            index |= 16;
        }
    } else if octant.is_neighbor_foreground(4) {
        if octant.is_neighbor_foreground(1) {
            index |= 8;
        }
        if octant.is_neighbor_foreground(3) {
            index |= 4;
        }
        if octant.is_neighbor_foreground(2) {
            index |= 2;
        }
    } else if octant.is_neighbor_foreground(3) {
        if octant.is_neighbor_foreground(2) {
            index |= 8;
        }
        if octant.is_neighbor_foreground(1) {
            index |= 4;
        }
    } else if octant.is_neighbor_foreground(2) && octant.is_neighbor_foreground(1) {
        index |= 2;
    }

    i64::from(EULER_LUT[index])
}
