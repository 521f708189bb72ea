use tracing::warn;

use crate::photo_pipeline::frame::types::CanonicalImage;

/// Box-filter downsample by an integer `factor`.
///
/// Output is `floor(width / factor) x floor(height / factor)`. Each output
/// pixel is the truncated per-channel mean of the `factor x factor` block at
/// `(dst_x * factor, dst_y * factor)`; samples outside the source are skipped.
/// A factor of 0 is treated as 1.
pub fn downsample(image: &CanonicalImage, factor: u32) -> CanonicalImage {
    let factor = if factor == 0 {
        warn!("Downsample factor 0 requested, using 1");
        1
    } else {
        factor
    };

    let dst_width = image.width / factor;
    let dst_height = image.height / factor;
    let src_width = image.width as usize;
    let src_height = image.height as usize;
    let factor = factor as usize;

    let mut pixels = vec![0u8; dst_width as usize * dst_height as usize * 4];

    for dst_y in 0..dst_height as usize {
        for dst_x in 0..dst_width as usize {
            let mut sums = [0u64; 4];
            let mut count = 0u64;

            for src_y in dst_y * factor..((dst_y + 1) * factor).min(src_height) {
                for src_x in dst_x * factor..((dst_x + 1) * factor).min(src_width) {
                    let i = (src_y * src_width + src_x) * 4;
                    for (sum, &value) in sums.iter_mut().zip(&image.pixels[i..i + 4]) {
                        *sum += value as u64;
                    }
                    count += 1;
                }
            }

            // floor sizing guarantees every block has samples
            debug_assert!(count > 0, "empty downsample block at ({}, {})", dst_x, dst_y);
            if count == 0 {
                continue;
            }

            let o = (dst_y * dst_width as usize + dst_x) * 4;
            for (channel, sum) in sums.iter().enumerate() {
                pixels[o + channel] = (sum / count) as u8;
            }
        }
    }

    CanonicalImage {
        width: dst_width,
        height: dst_height,
        pixels,
    }
}
