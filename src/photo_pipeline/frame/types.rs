//! Frame data types

use std::fmt;

/// GPU pixel encodings a rendered frame can arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
    Rgba8Srgb,
    Bgra8,
    Bgra8Srgb,
    /// Four little-endian IEEE half floats per pixel
    Rgba16F,
    /// Packed u32: 10 bits each of R, G, B then 2 bits of alpha
    Rgb10A2,
    /// Packed u32: 11-bit float R and G, 10-bit float B, no alpha
    Rg11B10F,
    /// Any host format the decoder does not know, by name
    Other(String),
}

impl PixelFormat {
    /// Bytes per pixel, or `None` for formats the pipeline cannot decode.
    pub fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            Self::Rgba16F => Some(8),
            Self::Rgba8
            | Self::Rgba8Srgb
            | Self::Bgra8
            | Self::Bgra8Srgb
            | Self::Rgb10A2
            | Self::Rg11B10F => Some(4),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba8 => write!(f, "rgba8"),
            Self::Rgba8Srgb => write!(f, "rgba8_srgb"),
            Self::Bgra8 => write!(f, "bgra8"),
            Self::Bgra8Srgb => write!(f, "bgra8_srgb"),
            Self::Rgba16F => write!(f, "rgba16f"),
            Self::Rgb10A2 => write!(f, "rgb10a2"),
            Self::Rg11B10F => write!(f, "rg11b10f"),
            Self::Other(name) => write!(f, "{}", name),
        }
    }
}

/// Bytes read back from the render target. Consumed by a single capture.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Tightly packed rows, no padding
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl RawFrame {
    pub fn new(bytes: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Self {
        Self { bytes, width, height, format }
    }
}

/// Byte length of a tightly packed `width x height` buffer, `None` on overflow.
pub(crate) fn buffer_len(width: u32, height: u32, bytes_per_pixel: usize) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(bytes_per_pixel)
}

/// 8-bit straight-alpha RGBA, row-major. `pixels.len() == width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl CanonicalImage {
    /// Wraps an existing buffer. Returns `None` if the length does not match.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if buffer_len(width, height, 4)? != pixels.len() {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Every pixel set to `rgba`.
    ///
    /// # Panics
    ///
    /// If `width * height * 4` does not fit in `usize`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let len = buffer_len(width, height, 4)
            .unwrap_or_else(|| panic!("{}x{} image does not fit in memory", width, height));
        let pixels = rgba.iter().copied().cycle().take(len).collect();
        Self { width, height, pixels }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Mean of `0.299r + 0.587g + 0.114b` over all pixels, in `[0, 1]`.
    pub fn average_luminance(&self) -> f64 {
        let count = self.pixel_count();
        if count == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .pixels
            .chunks_exact(4)
            .map(|px| {
                (0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64) / 255.0
            })
            .sum();
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rejects_length_mismatch() {
        assert!(CanonicalImage::from_raw(2, 2, vec![0u8; 15]).is_none());
        assert!(CanonicalImage::from_raw(2, 2, vec![0u8; 16]).is_some());
    }

    #[test]
    fn test_from_raw_rejects_overflowing_size() {
        assert!(CanonicalImage::from_raw(u32::MAX, u32::MAX, Vec::new()).is_none());
        assert_eq!(buffer_len(u32::MAX, u32::MAX, 8), None);
        assert_eq!(buffer_len(3, 2, 4), Some(24));
    }

    #[test]
    fn test_filled_and_pixel() {
        let image = CanonicalImage::filled(3, 2, [1, 2, 3, 4]);
        assert_eq!(image.pixels.len(), 24);
        assert_eq!(image.pixel(2, 1), [1, 2, 3, 4]);
    }

    #[test]
    fn test_average_luminance_extremes() {
        assert_eq!(CanonicalImage::filled(4, 4, [0, 0, 0, 255]).average_luminance(), 0.0);
        let white = CanonicalImage::filled(4, 4, [255, 255, 255, 255]).average_luminance();
        assert!((white - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Rgba16F.bytes_per_pixel(), Some(8));
        assert_eq!(PixelFormat::Rg11B10F.bytes_per_pixel(), Some(4));
        assert_eq!(PixelFormat::Other("depth32f".into()).bytes_per_pixel(), None);
    }
}
