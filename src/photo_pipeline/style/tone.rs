use crate::photo_pipeline::frame::types::CanonicalImage;
use crate::photo_pipeline::style::types::{StyleProfile, ToneMode};

/// Applies the profile's tone transform to every pixel. Alpha is untouched.
pub fn stylize(mut image: CanonicalImage, profile: &StyleProfile) -> CanonicalImage {
    let transform: fn([f32; 3]) -> [f32; 3] = match profile.tone_mode {
        ToneMode::Sepia => sepia_blend,
        ToneMode::DesaturateTint => desaturate_tint,
    };

    for px in image.pixels.chunks_exact_mut(4) {
        let rgb = [px[0] as f32 / 255.0, px[1] as f32 / 255.0, px[2] as f32 / 255.0];
        let [r, g, b] = transform(rgb);
        px[0] = to_byte(r);
        px[1] = to_byte(g);
        px[2] = to_byte(b);
    }

    image
}

fn sepia_blend([r, g, b]: [f32; 3]) -> [f32; 3] {
    let luminance = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    let target = [
        0.4 + 0.55 * luminance,
        0.3 + 0.60 * luminance,
        0.2 + 0.60 * luminance,
    ];
    // brighter pixels are pulled harder toward the target
    let strength = (0.7 + 0.3 * luminance).clamp(0.7, 1.0);
    [
        r + (target[0] - r) * strength,
        g + (target[1] - g) * strength,
        b + (target[2] - b) * strength,
    ]
}

fn desaturate_tint([r, g, b]: [f32; 3]) -> [f32; 3] {
    let gray = 0.299 * r + 0.587 * g + 0.114 * b;
    [
        (gray * 1.05).min(1.0),
        (gray * 0.95).min(1.0),
        (gray * 0.82).min(1.0),
    ]
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
