use tracing::{info, instrument};

use crate::photo_pipeline::{
    common::error::{CaptureError, Result},
    conversions::{timing::PipelineTimings, types::PhotoConfig},
    decode::PixelDecoder,
    frame::{CanonicalImage, FrameSource, RawFrame},
    geometry::{center_third, crop, downsample},
    persist::{PhotoCounter, PhotoPersister, PhotoRecord, PhotoWriter, PngPhotoWriter},
    style::{GrainSynthesizer, StyleProfile, normalize_brightness, stylize},
};

pub struct EvidencePhotoPipeline<W: PhotoWriter> {
    decoder: PixelDecoder,
    grain: GrainSynthesizer,
    persister: PhotoPersister<W>,
    config: PhotoConfig,
}

impl EvidencePhotoPipeline<PngPhotoWriter> {
    pub fn new(config: PhotoConfig) -> Result<Self> {
        Self::with_custom(PngPhotoWriter, GrainSynthesizer::from_entropy(), config)
    }
}

impl<W: PhotoWriter> EvidencePhotoPipeline<W> {
    pub fn with_custom(writer: W, grain: GrainSynthesizer, config: PhotoConfig) -> Result<Self> {
        config.profile.validate()?;
        let persister = PhotoPersister::with_custom(writer, config.output_dir.clone(), PhotoCounter::new());
        Ok(Self {
            decoder: PixelDecoder,
            grain,
            persister,
            config,
        })
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CaptureError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(CaptureError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Runs every stage up to, but not including, encoding.
    pub fn develop(&mut self, raw: RawFrame) -> Result<CanonicalImage> {
        self.develop_with_timings(raw).map(|(image, _)| image)
    }

    #[instrument(skip(self, raw), fields(width = raw.width, height = raw.height, format = %raw.format))]
    pub fn develop_with_timings(&mut self, raw: RawFrame) -> Result<(CanonicalImage, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let (source_width, source_height) = (raw.width, raw.height);

        self.validate_dimensions(source_width, source_height)?;

        let decoded = timings.time("decode", || self.decoder.decode(raw))?;

        let (x, y, w, h) = center_third(decoded.width, decoded.height);
        let cropped = timings.time("crop", || crop(&decoded, x, y, w, h));
        drop(decoded);

        let factor = self.config.downsample_factor;
        let reduced = timings.time("downsample", || downsample(&cropped, factor));
        drop(cropped);

        if reduced.width == 0 || reduced.height == 0 {
            return Err(CaptureError::InvalidDimensions(source_width, source_height));
        }

        let profile = &self.config.profile;
        let toned = timings.time("stylize", || stylize(reduced, profile));
        let normalized = timings.time("normalize", || {
            normalize_brightness(toned, profile.target_brightness)
        });

        let grain = &mut self.grain;
        let finished = timings.time("grain", || {
            grain.add_grain(normalized, profile.grain_model, profile.grain_intensity)
        });

        info!(
            width = finished.width,
            height = finished.height,
            elapsed_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Photo developed"
        );
        Ok((finished, timings))
    }

    /// Develops `raw` and saves it under the next sequence number.
    pub fn process(&mut self, raw: RawFrame) -> Result<PhotoRecord> {
        let image = self.develop(raw)?;
        self.persister.persist(&image, &self.config.profile)
    }

    /// Waits for the GPU, reads the finished frame and processes it.
    ///
    /// Only call this at the frame-complete boundary.
    #[instrument(skip(self, source))]
    pub fn capture_from(&mut self, source: &mut dyn FrameSource) -> Result<PhotoRecord> {
        {
            let _span = tracing::info_span!("flush_and_wait").entered();
            source.flush_and_wait()?;
        }

        let raw = {
            let _span = tracing::info_span!("read_frame").entered();
            source.rendered_frame()?
        };

        self.process(raw)
    }

    pub fn config(&self) -> &PhotoConfig {
        &self.config
    }

    /// Swaps the style used for subsequent captures.
    pub fn set_profile(&mut self, profile: StyleProfile) -> Result<()> {
        profile.validate()?;
        self.config.profile = profile;
        Ok(())
    }

    pub fn persister(&self) -> &PhotoPersister<W> {
        &self.persister
    }
}
