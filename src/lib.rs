pub mod error;
pub mod measure;
pub mod phantom;
pub mod volume;

pub use error::{Result, TrabeculaError};
