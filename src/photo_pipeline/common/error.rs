use thiserror::Error;

/// Everything that can abandon a capture. None of these are fatal to the host.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("No active renderer to read a frame from")]
    NoActiveRenderer,

    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    #[error("Unsupported pixel format: {0}")]
    UnsupportedPixelFormat(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Invalid style profile: {0}")]
    InvalidProfile(String),

    #[error("Photo sequence numbers exhausted after {0}")]
    SequenceExhausted(u32),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
