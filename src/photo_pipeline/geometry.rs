//! Geometric resampling module
//!
//! Rectangle crop and integer-factor box-filter downsampling.

mod crop;
mod downsample;

pub use crop::{center_third, crop};
pub use downsample::downsample;
