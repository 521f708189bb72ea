use crate::photo_pipeline::common::error::Result;
use crate::photo_pipeline::frame::types::RawFrame;

/// The rendering subsystem as seen by the capture pipeline.
///
/// Called only at the frame-complete boundary, after every command for the
/// frame has been submitted.
pub trait FrameSource {
    /// Submit outstanding GPU work and block until the GPU reports completion.
    fn flush_and_wait(&mut self) -> Result<()>;

    /// Copy of the fully composed frame. Fails with `NoActiveRenderer` when
    /// there is nothing to read from.
    fn rendered_frame(&mut self) -> Result<RawFrame>;
}
