use thiserror::Error;

/// Top-level error type for the trabecula morphometry kernel.
#[derive(Debug, Error)]
pub enum TrabeculaError {
    #[error(transparent)]
    Volume(#[from] VolumeError),
}

/// Errors related to constructing or validating voxel volumes.
///
/// Measurements themselves are infallible: once a [`crate::volume::BitVolume`]
/// exists it is three-dimensional by construction, and degenerate geometry
/// (zero-sized axes, zero calibrated volume) produces well-defined IEEE-754
/// results rather than errors.
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("expected a 3-dimensional volume, got {0} dimensions")]
    NotThreeDimensional(usize),

    #[error("voxel data has {actual} elements, extents require {expected}")]
    DataLengthMismatch { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`TrabeculaError`].
pub type Result<T> = std::result::Result<T, TrabeculaError>;
