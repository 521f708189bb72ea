use crate::photo_pipeline::frame::types::CanonicalImage;

/// Rectangle `(x, y, w, h)` covering the middle third of a frame on both axes.
///
/// Uses floor division, so the result is always inside the frame.
pub fn center_third(width: u32, height: u32) -> (u32, u32, u32, u32) {
    (width / 3, height / 3, width / 3, height / 3)
}

/// Dense row-major copy of the `w x h` sub-rectangle at `(x, y)`.
///
/// # Panics
///
/// If the rectangle does not fit inside `image`.
pub fn crop(image: &CanonicalImage, x: u32, y: u32, w: u32, h: u32) -> CanonicalImage {
    assert!(
        x as u64 + w as u64 <= image.width as u64 && y as u64 + h as u64 <= image.height as u64,
        "crop rectangle {}x{}+{}+{} exceeds {}x{} image",
        w,
        h,
        x,
        y,
        image.width,
        image.height
    );

    let src_stride = image.width as usize * 4;
    let row_bytes = w as usize * 4;
    let mut pixels = Vec::with_capacity(row_bytes * h as usize);

    for row in y as usize..(y + h) as usize {
        let start = row * src_stride + x as usize * 4;
        pixels.extend_from_slice(&image.pixels[start..start + row_bytes]);
    }

    CanonicalImage {
        width: w,
        height: h,
        pixels,
    }
}
