//! Capture state types

/// Shutter and capture-request flags. Only [`CaptureScheduler`] mutates this.
///
/// [`CaptureScheduler`]: crate::photo_pipeline::capture::CaptureScheduler
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CaptureState {
    pub shutter_active: bool,
    /// Seconds since the shutter was triggered
    pub shutter_elapsed: f32,
    /// A frame read is latched and waiting for the next frame-complete boundary
    pub capture_request_pending: bool,
    /// The shutter passed its closed instant during the current cycle
    pub captured_this_cycle: bool,
}
