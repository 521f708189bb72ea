//! Capture scheduling module
//!
//! Couples the shutter animation to a deferred frame read that runs only at
//! the renderer's frame-complete boundary.

mod camera;
mod scheduler;
pub mod state;

pub use camera::PhotoCamera;
pub use scheduler::{CaptureScheduler, DEFAULT_SHUTTER_DURATION};
pub use state::CaptureState;
