use tracing::{error, info};

use crate::photo_pipeline::capture::scheduler::CaptureScheduler;
use crate::photo_pipeline::common::error::Result;
use crate::photo_pipeline::conversions::{EvidencePhotoPipeline, PhotoConfig};
use crate::photo_pipeline::frame::FrameSource;
use crate::photo_pipeline::persist::{PhotoRecord, PhotoWriter, PngPhotoWriter};

type PhotoSavedListener = Box<dyn FnMut(&PhotoRecord)>;

/// What the game loop talks to.
///
/// Input calls [`take_photo`](Self::take_photo), the frame loop calls
/// [`advance`](Self::advance) every tick and
/// [`on_frame_complete`](Self::on_frame_complete) once the frame's GPU work
/// has been submitted.
pub struct PhotoCamera<W: PhotoWriter> {
    scheduler: CaptureScheduler,
    pipeline: EvidencePhotoPipeline<W>,
    listeners: Vec<PhotoSavedListener>,
}

impl PhotoCamera<PngPhotoWriter> {
    pub fn new(config: PhotoConfig) -> Result<Self> {
        Ok(Self::with_pipeline(EvidencePhotoPipeline::new(config)?))
    }
}

impl<W: PhotoWriter> PhotoCamera<W> {
    pub fn with_pipeline(pipeline: EvidencePhotoPipeline<W>) -> Self {
        Self {
            scheduler: CaptureScheduler::new(pipeline.config().shutter_duration),
            pipeline,
            listeners: Vec::new(),
        }
    }

    /// Non-blocking. Returns `false` if a shutter cycle is already running.
    pub fn take_photo(&mut self) -> bool {
        self.scheduler.take_photo()
    }

    /// Per-frame tick. Returns the shutter overlay alpha.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.scheduler.advance(dt)
    }

    pub fn is_capture_request_pending(&self) -> bool {
        self.scheduler.is_capture_request_pending()
    }

    pub fn clear_capture_request(&mut self) {
        self.scheduler.clear_capture_request();
    }

    /// Registers a callback run after every successful save.
    pub fn on_photo_saved<F>(&mut self, listener: F)
    where
        F: FnMut(&PhotoRecord) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Frame-complete hook.
    ///
    /// Runs the latched capture, if any, exactly once: the request is consumed
    /// before any work, so a failure is logged and not retried. Returns `None`
    /// when nothing was pending.
    pub fn on_frame_complete(&mut self, source: &mut dyn FrameSource) -> Option<Result<PhotoRecord>> {
        if !self.scheduler.take_capture_request() {
            return None;
        }

        info!(profile = %self.pipeline.config().profile.name, "Capturing frame");
        let result = self.pipeline.capture_from(source);

        match &result {
            Ok(record) => {
                for listener in &mut self.listeners {
                    listener(record);
                }
            }
            Err(e) => error!("Photo capture abandoned: {}", e),
        }

        Some(result)
    }

    pub fn scheduler(&self) -> &CaptureScheduler {
        &self.scheduler
    }

    pub fn pipeline(&self) -> &EvidencePhotoPipeline<W> {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut EvidencePhotoPipeline<W> {
        &mut self.pipeline
    }
}
