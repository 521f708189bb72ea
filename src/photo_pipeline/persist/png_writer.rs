use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::photo_pipeline::common::error::{CaptureError, Result};
use crate::photo_pipeline::frame::types::CanonicalImage;
use crate::photo_pipeline::persist::writer::PhotoWriter;

/// Lossless 8-bit RGBA PNG, row stride `width * 4`, no metadata chunks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngPhotoWriter;

impl PhotoWriter for PngPhotoWriter {
    fn extension(&self) -> &str {
        "png"
    }

    fn write_photo(&self, image: &CanonicalImage, output: &mut dyn Write) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        if image.width == 0 || image.height == 0 {
            return Err(CaptureError::EncodeError(format!(
                "cannot encode empty {}x{} image",
                image.width, image.height
            )));
        }

        let mut buffer = Vec::new();

        PngEncoder::new(&mut buffer)
            .write_image(&image.pixels, image.width, image.height, ExtendedColorType::Rgba8)
            .map_err(|e| CaptureError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
