//! Synthetic test structures with known topology.

mod solid_cuboid;
mod wire_frame_cuboid;

pub use solid_cuboid::SolidCuboid;
pub use wire_frame_cuboid::WireFrameCuboid;
