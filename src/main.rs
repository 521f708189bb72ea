use evidence_photo::logger;
use evidence_photo::photo_pipeline::{
    CaptureError, FrameSource, PhotoCamera, PhotoConfig, PixelFormat, RawFrame, StyleProfile,
};

use tracing::{error, info, warn};

const FRAME_WIDTH: u32 = 640;
const FRAME_HEIGHT: u32 = 360;
const TICK: f32 = 1.0 / 60.0;

/// Stand-in renderer that composes a BGRA8 gradient, like a swapchain readback.
struct GradientRenderer {
    frame_index: u32,
}

impl FrameSource for GradientRenderer {
    fn flush_and_wait(&mut self) -> Result<(), CaptureError> {
        Ok(())
    }

    fn rendered_frame(&mut self) -> Result<RawFrame, CaptureError> {
        let mut bytes = Vec::with_capacity((FRAME_WIDTH * FRAME_HEIGHT * 4) as usize);
        for y in 0..FRAME_HEIGHT {
            for x in 0..FRAME_WIDTH {
                let r = (x * 255 / FRAME_WIDTH) as u8;
                let g = (y * 255 / FRAME_HEIGHT) as u8;
                let b = (self.frame_index.wrapping_mul(7) % 256) as u8;
                bytes.extend_from_slice(&[b, g, r, 255]);
            }
        }
        Ok(RawFrame::new(bytes, FRAME_WIDTH, FRAME_HEIGHT, PixelFormat::Bgra8Srgb))
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting evidence_photo...");

    let profile_name = std::env::var("EVIDENCE_PHOTO_PROFILE").unwrap_or_else(|_| "photo_mode".to_string());
    let profile = StyleProfile::preset(&profile_name).unwrap_or_else(|| {
        warn!("Unknown profile '{}', falling back to photo_mode", profile_name);
        StyleProfile::photo_mode()
    });

    let config = PhotoConfig::builder().profile(profile).build();
    info!("Output directory: {}", config.output_dir.display());
    info!("Style profile: {}", config.profile);

    let mut camera = PhotoCamera::new(config)?;
    camera.on_photo_saved(|record| {
        info!(sequence = record.sequence_number, "New photo at {}", record.file_path.display());
    });

    let mut renderer = GradientRenderer { frame_index: 0 };
    camera.take_photo();

    loop {
        renderer.frame_index += 1;
        let alpha = camera.advance(TICK);

        if let Some(result) = camera.on_frame_complete(&mut renderer) {
            match result {
                Ok(record) => info!("Capture successful: photo_{}", record.sequence_number),
                Err(e) => error!("Capture failed: {}", e),
            }
        }

        if !camera.scheduler().is_animating() && !camera.is_capture_request_pending() {
            break;
        }
        tracing::trace!(frame = renderer.frame_index, alpha, "Shutter tick");
    }

    Ok(())
}
