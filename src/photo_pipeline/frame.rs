//! Frame types module
//!
//! Raw GPU readback frames, the canonical RGBA8 image every stage works on,
//! and the trait the host renderer implements to hand frames over.

mod source;
pub mod types;

pub use source::FrameSource;
pub use types::{CanonicalImage, PixelFormat, RawFrame};
