//! Film grain synthesis.
//!
//! Two noise models are supported. [`GrainModel::UniformRandom`] draws from a
//! seedable [`StdRng`] and is only reproducible when built with
//! [`GrainSynthesizer::with_seed`]. [`GrainModel::FrequencyPositional`] is a
//! pure function of pixel position and luminance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::photo_pipeline::frame::types::CanonicalImage;
use crate::photo_pipeline::style::types::GrainModel;

/// Spatial period of the positional noise, in pixels.
const POSITIONAL_SCALE: f32 = 48.0;

/// Positional grain never produces channel values outside this band.
pub const POSITIONAL_FLOOR: u8 = 32;
pub const POSITIONAL_CEILING: u8 = 223;

pub struct GrainSynthesizer {
    rng: StdRng,
}

impl Default for GrainSynthesizer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl GrainSynthesizer {
    /// Non-reproducible source for normal captures.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Adds grain to RGB. Alpha is untouched.
    pub fn add_grain(
        &mut self,
        image: CanonicalImage,
        model: GrainModel,
        intensity: f32,
    ) -> CanonicalImage {
        debug!(?model, intensity, "Adding film grain");
        match model {
            GrainModel::UniformRandom => self.uniform(image, intensity),
            GrainModel::FrequencyPositional => positional(image, intensity),
        }
    }

    fn uniform(&mut self, mut image: CanonicalImage, intensity: f32) -> CanonicalImage {
        let range = intensity.max(0.0) as i32;
        for px in image.pixels.chunks_exact_mut(4) {
            let noise = self.rng.gen_range(-range..=range);
            for channel in &mut px[..3] {
                *channel = (*channel as i32 + noise).clamp(0, 255) as u8;
            }
        }
        image
    }
}

/// Grain value at `(x, y)`, roughly in `[-0.7, 0.8]`.
pub(crate) fn positional_grain(x: u32, y: u32) -> f32 {
    let nx = x as f32 / POSITIONAL_SCALE;
    let ny = y as f32 / POSITIONAL_SCALE;
    let hash = ((x as u64 * 7919 + y as u64 * 7927) % 1000) as f32;

    0.3 * (127.1 * nx + 311.7 * ny).sin()
        + 0.2 * (269.5 * nx + 183.3 * ny).sin()
        + 0.1 * (419.2 * nx + 371.9 * ny).sin()
        + hash / 5000.0
        - 0.1
}

fn positional(mut image: CanonicalImage, intensity: f32) -> CanonicalImage {
    let width = image.width as usize;
    if width == 0 {
        return image;
    }

    for (index, px) in image.pixels.chunks_exact_mut(4).enumerate() {
        let x = (index % width) as u32;
        let y = (index / width) as u32;

        let luminance = (0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32) / 255.0;
        // grain is stronger in highlights
        let adaptive = intensity * (0.5 + 0.5 * luminance);
        let delta = (positional_grain(x, y) * adaptive) as i32;

        for channel in &mut px[..3] {
            *channel = (*channel as i32 + delta)
                .clamp(POSITIONAL_FLOOR as i32, POSITIONAL_CEILING as i32) as u8;
        }
    }

    image
}
