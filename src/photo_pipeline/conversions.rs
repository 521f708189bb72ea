//! Pipeline conversions module
//!
//! Orchestrates a rendered frame through every stage into a saved photo.

mod evidence_photo;
mod timing;
pub mod types;


pub use evidence_photo::EvidencePhotoPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{PhotoConfig, PhotoConfigBuilder};
