use crate::volume::BitVolume;

/// The 2×2×2 neighborhood of grid cells whose maximal corner is a given
/// voxel coordinate.
///
/// Neighbors are numbered 1-8 in the canonical order used by the Euler
/// contribution table: for a coordinate `(u, v, w)`,
///
/// ```text
/// 1 = (u-1, v-1, w-1)   5 = (u-1, v-1, w)
/// 2 = (u-1, v,   w-1)   6 = (u-1, v,   w)
/// 3 = (u,   v-1, w-1)   7 = (u,   v-1, w)
/// 4 = (u,   v,   w-1)   8 = (u,   v,   w)
/// ```
///
/// Reads outside the grid are background via [`BitVolume::get`]. One
/// `Octant` is reused for every position of an accumulation pass so the
/// hot loop performs no per-voxel allocation.
#[derive(Debug, Default)]
pub struct Octant {
    neighborhood: [bool; 8],
    foreground_neighbors: u32,
}

impl Octant {
    /// Creates an all-background octant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the neighborhood whose maximal corner is `(u, v, w)`.
    pub fn sample(&mut self, volume: &BitVolume, u: i64, v: i64, w: i64) {
        self.neighborhood[0] = volume.get(u - 1, v - 1, w - 1);
        self.neighborhood[1] = volume.get(u - 1, v, w - 1);
        self.neighborhood[2] = volume.get(u, v - 1, w - 1);
        self.neighborhood[3] = volume.get(u, v, w - 1);
        self.neighborhood[4] = volume.get(u - 1, v - 1, w);
        self.neighborhood[5] = volume.get(u - 1, v, w);
        self.neighborhood[6] = volume.get(u, v - 1, w);
        self.neighborhood[7] = volume.get(u, v, w);

        self.foreground_neighbors = self
            .neighborhood
            .iter()
            .map(|&neighbor| u32::from(neighbor))
            .sum();
    }

    /// Whether neighbor `n` (1-based) is foreground.
    #[must_use]
    pub fn is_neighbor_foreground(&self, n: usize) -> bool {
        self.neighborhood[n - 1]
    }

    /// Whether every neighbor is background.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foreground_neighbors == 0
    }
}
