//! Common utilities module
//!
//! This module contains shared utilities used across the photo pipeline.

pub mod error;

pub use error::{CaptureError, Result};
