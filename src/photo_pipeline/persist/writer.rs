use std::io::Write;
use crate::photo_pipeline::common::error::Result;
use crate::photo_pipeline::frame::types::CanonicalImage;

pub trait PhotoWriter {
    /// File extension, without the dot, for files this writer produces.
    fn extension(&self) -> &str;

    fn write_photo(&self, image: &CanonicalImage, output: &mut dyn Write) -> Result<()>;
}
