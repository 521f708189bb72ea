//! Evidence photo pipeline
//!
//! Turns a rendered frame read back from the GPU into a stylized, numbered
//! PNG. Stages run strictly in order:
//! decode -> crop -> downsample -> stylize -> normalize -> grain -> encode.

pub mod common;
pub mod frame;
pub mod decode;
pub mod geometry;
pub mod style;
pub mod persist;
pub mod capture;
pub mod conversions;

pub use common::{
    CaptureError,
    Result,
};

pub use frame::{
    CanonicalImage,
    FrameSource,
    PixelFormat,
    RawFrame,
};

pub use decode::{
    PixelDecoder,
};

pub use geometry::{
    center_third,
    crop,
    downsample,
};

pub use style::{
    GrainModel,
    GrainSynthesizer,
    StyleProfile,
    ToneMode,
    normalize_brightness,
    stylize,
};

pub use persist::{
    PhotoCounter,
    PhotoPersister,
    PhotoRecord,
    PhotoWriter,
    PngPhotoWriter,
};

pub use capture::{
    CaptureScheduler,
    CaptureState,
    PhotoCamera,
};

pub use conversions::{
    EvidencePhotoPipeline,
    PhotoConfig,
    PhotoConfigBuilder,
    PipelineTimings,
    StepTiming,
};
