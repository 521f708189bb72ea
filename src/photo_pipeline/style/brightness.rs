use tracing::debug;

use crate::photo_pipeline::frame::types::CanonicalImage;

/// Below this average luminance the image is treated as black and left alone.
const LUMINANCE_EPSILON: f64 = 0.001;

/// Darkens `image` so its average Rec. 601 luminance approaches `target`.
///
/// Images already at or below the target are returned unchanged; this never
/// brightens. RGB channels are scaled by `target / average` and truncated.
pub fn normalize_brightness(mut image: CanonicalImage, target: f32) -> CanonicalImage {
    let average = image.average_luminance();
    let target = target as f64;

    if average <= target || average <= LUMINANCE_EPSILON {
        debug!(average, target, "Brightness already within target");
        return image;
    }

    let factor = (target / average).clamp(0.0, 1.0);
    debug!(average, target, factor, "Normalizing brightness");

    for px in image.pixels.chunks_exact_mut(4) {
        for channel in &mut px[..3] {
            *channel = (*channel as f64 * factor) as u8;
        }
    }

    image
}
