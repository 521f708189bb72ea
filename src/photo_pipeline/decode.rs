//! Pixel decoding module
//!
//! Converts GPU readback buffers into the canonical RGBA8 layout.

mod decoder;
mod packed_float;

pub use decoder::PixelDecoder;
