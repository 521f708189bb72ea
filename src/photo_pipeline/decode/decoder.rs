//! Canonicalizing decoder for render target readbacks.
//!
//! Each supported [`PixelFormat`] maps to one pure conversion function that
//! produces 8-bit straight-alpha RGBA. sRGB-tagged formats are copied as
//! stored; the transfer curve is left alone.

use tracing::debug;

use crate::photo_pipeline::common::error::{CaptureError, Result};
use crate::photo_pipeline::decode::packed_float::{
    half_to_f32, uf10_to_f32, uf11_to_f32, unit_float_to_u8,
};
use crate::photo_pipeline::frame::types::{CanonicalImage, PixelFormat, RawFrame, buffer_len};

const TEN_BIT_MAX: u32 = 1023;
const TWO_BIT_MAX: u32 = 3;

/// Stateless decoder from [`RawFrame`] to [`CanonicalImage`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PixelDecoder;

impl PixelDecoder {
    /// Decodes a readback buffer.
    ///
    /// # Errors
    ///
    /// * `UnsupportedPixelFormat` for [`PixelFormat::Other`]
    /// * `InvalidFrame` for a zero-sized frame or a buffer whose length is not
    ///   `width * height * bytes_per_pixel`
    pub fn decode(&self, raw: RawFrame) -> Result<CanonicalImage> {
        let bytes_per_pixel = raw
            .format
            .bytes_per_pixel()
            .ok_or_else(|| CaptureError::UnsupportedPixelFormat(raw.format.to_string()))?;

        if raw.width == 0 || raw.height == 0 {
            return Err(CaptureError::InvalidFrame(format!(
                "zero-sized frame {}x{}",
                raw.width, raw.height
            )));
        }

        let expected = buffer_len(raw.width, raw.height, bytes_per_pixel).ok_or_else(|| {
            CaptureError::InvalidFrame(format!(
                "{} frame {}x{} is too large to address",
                raw.format, raw.width, raw.height
            ))
        })?;
        if raw.bytes.len() != expected {
            return Err(CaptureError::InvalidFrame(format!(
                "{} frame {}x{} needs {} bytes, got {}",
                raw.format,
                raw.width,
                raw.height,
                expected,
                raw.bytes.len()
            )));
        }

        debug!(format = %raw.format, width = raw.width, height = raw.height, "Decoding frame");

        let pixels = match raw.format {
            PixelFormat::Rgba8 | PixelFormat::Rgba8Srgb => raw.bytes,
            PixelFormat::Bgra8 | PixelFormat::Bgra8Srgb => swap_red_blue(raw.bytes),
            PixelFormat::Rgba16F => decode_rgba16f(&raw.bytes),
            PixelFormat::Rgb10A2 => decode_rgb10a2(&raw.bytes),
            PixelFormat::Rg11B10F => decode_rg11b10f(&raw.bytes),
            PixelFormat::Other(name) => return Err(CaptureError::UnsupportedPixelFormat(name)),
        };

        Ok(CanonicalImage {
            width: raw.width,
            height: raw.height,
            pixels,
        })
    }
}

fn swap_red_blue(mut bytes: Vec<u8>) -> Vec<u8> {
    for px in bytes.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    bytes
}

fn decode_rgba16f(bytes: &[u8]) -> Vec<u8> {
    bytes
        .chunks_exact(2)
        .map(|half| unit_float_to_u8(half_to_f32(u16::from_le_bytes([half[0], half[1]]))))
        .collect()
}

fn decode_rgb10a2(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for word in bytes.chunks_exact(4) {
        let packed = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        let r = packed & 0x3ff;
        let g = (packed >> 10) & 0x3ff;
        let b = (packed >> 20) & 0x3ff;
        let a = packed >> 30;
        out.extend_from_slice(&[
            (r * 255 / TEN_BIT_MAX) as u8,
            (g * 255 / TEN_BIT_MAX) as u8,
            (b * 255 / TEN_BIT_MAX) as u8,
            (a * 255 / TWO_BIT_MAX) as u8,
        ]);
    }
    out
}

fn decode_rg11b10f(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    for word in bytes.chunks_exact(4) {
        let packed = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        out.extend_from_slice(&[
            unit_float_to_u8(uf11_to_f32(packed & 0x7ff)),
            unit_float_to_u8(uf11_to_f32((packed >> 11) & 0x7ff)),
            unit_float_to_u8(uf10_to_f32(packed >> 22)),
            // no alpha channel in this format
            255,
        ]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(bytes: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> RawFrame {
        RawFrame::new(bytes, width, height, format)
    }

    #[test]
    fn test_rgba8_is_byte_identical() {
        let bytes: Vec<u8> = (0..2 * 3 * 4).map(|v| (v * 11) as u8).collect();
        for format in [PixelFormat::Rgba8, PixelFormat::Rgba8Srgb] {
            let image = PixelDecoder.decode(frame(bytes.clone(), 2, 3, format)).unwrap();
            assert_eq!(image.pixels, bytes);
            assert_eq!((image.width, image.height), (2, 3));
        }
    }

    #[test]
    fn test_bgra8_matches_swapped_rgba8() {
        let rgba: Vec<u8> = vec![10, 20, 30, 40, 200, 150, 100, 255];
        let bgra: Vec<u8> = vec![30, 20, 10, 40, 100, 150, 200, 255];
        let from_rgba = PixelDecoder.decode(frame(rgba, 2, 1, PixelFormat::Rgba8)).unwrap();
        let from_bgra = PixelDecoder.decode(frame(bgra.clone(), 2, 1, PixelFormat::Bgra8)).unwrap();
        let from_bgra_srgb = PixelDecoder.decode(frame(bgra, 2, 1, PixelFormat::Bgra8Srgb)).unwrap();
        assert_eq!(from_rgba, from_bgra);
        assert_eq!(from_rgba, from_bgra_srgb);
    }

    #[test]
    fn test_rgba16f_clamps_and_truncates() {
        // 0.5, 1.0, 2.0 (clamped), -1.0 (clamped)
        let halves: [u16; 4] = [0x3800, 0x3c00, 0x4000, 0xbc00];
        let bytes: Vec<u8> = halves.iter().flat_map(|h| h.to_le_bytes()).collect();
        let image = PixelDecoder.decode(frame(bytes, 1, 1, PixelFormat::Rgba16F)).unwrap();
        assert_eq!(image.pixels, vec![127, 255, 255, 0]);
    }

    #[test]
    fn test_rgb10a2_integer_scaling() {
        let r = 1023u32;
        let g = 512u32;
        let b = 0u32;
        let a = 1u32;
        let packed = r | (g << 10) | (b << 20) | (a << 30);
        let image = PixelDecoder
            .decode(frame(packed.to_le_bytes().to_vec(), 1, 1, PixelFormat::Rgb10A2))
            .unwrap();
        // 512 * 255 / 1023 = 127, 1 * 255 / 3 = 85
        assert_eq!(image.pixels, vec![255, 127, 0, 85]);
    }

    #[test]
    fn test_rg11b10f_forces_opaque_alpha() {
        let one_11 = 15u32 << 6;
        let half_11 = 14u32 << 6;
        let one_10 = 15u32 << 5;
        let packed = one_11 | (half_11 << 11) | (one_10 << 22);
        let image = PixelDecoder
            .decode(frame(packed.to_le_bytes().to_vec(), 1, 1, PixelFormat::Rg11B10F))
            .unwrap();
        assert_eq!(image.pixels, vec![255, 127, 255, 255]);
    }

    #[test]
    fn test_unsupported_format() {
        let result = PixelDecoder.decode(frame(vec![0; 4], 1, 1, PixelFormat::Other("depth24".into())));
        assert!(matches!(result, Err(CaptureError::UnsupportedPixelFormat(name)) if name == "depth24"));
    }

    #[test]
    fn test_zero_sized_frame_is_invalid() {
        let result = PixelDecoder.decode(frame(Vec::new(), 0, 4, PixelFormat::Rgba8));
        assert!(matches!(result, Err(CaptureError::InvalidFrame(_))));
    }

    #[test]
    fn test_oversized_dimensions_are_invalid() {
        let result = PixelDecoder.decode(frame(Vec::new(), u32::MAX, u32::MAX, PixelFormat::Rgba16F));
        assert!(matches!(result, Err(CaptureError::InvalidFrame(_))));
    }

    #[test]
    fn test_length_mismatch_is_invalid() {
        // rgba16f needs 8 bytes per pixel
        let result = PixelDecoder.decode(frame(vec![0; 16], 2, 2, PixelFormat::Rgba16F));
        assert!(matches!(result, Err(CaptureError::InvalidFrame(_))));
    }
}
