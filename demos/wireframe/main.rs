//! Measures the connectivity of a wire-frame cuboid phantom.
//!
//! Usage:
//! ```text
//! cargo run --example wireframe
//! ```
//!
//! The frame carries five independent loops, so the expected connectivity
//! is 5 whatever its extents.

use trabecula::measure::Connectivity;
use trabecula::phantom::WireFrameCuboid;
use trabecula::volume::VoxelSize;

fn main() {
    // Default: INFO for trabecula. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wireframe=info".parse().unwrap_or_default())
        .add_directive("trabecula=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let volume = WireFrameCuboid::new(10, 10, 10)
        .with_padding(1)
        .with_voxel_size(VoxelSize::isotropic(0.2))
        .execute();

    tracing::info!(
        extents = ?(volume.u_size(), volume.v_size(), volume.w_size()),
        calibrated_volume = volume.calibrated_volume(),
        "built wire-frame phantom"
    );

    let results = Connectivity::new().execute(&volume);

    tracing::info!(chi = results.euler_characteristic, "euler characteristic");
    tracing::info!(delta_chi = results.delta_chi, "boundary-corrected contribution");
    tracing::info!(connectivity = results.connectivity, "connectivity");
    tracing::info!(density = results.connectivity_density, "connectivity density");

    println!("euler characteristic: {}", results.euler_characteristic);
    println!("delta chi:            {}", results.delta_chi);
    println!("connectivity:         {}", results.connectivity);
    println!("connectivity density: {}", results.connectivity_density);
}
