//! Morphometric measurements over binary volumes.

pub mod connectivity;

pub use connectivity::{Characteristics, Connectivity};
