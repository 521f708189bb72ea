//! Stylization module
//!
//! Tone mapping, brightness normalization and film grain, plus the
//! [`StyleProfile`] presets that select between them.

mod brightness;
mod grain;
mod tone;
pub mod types;

pub use brightness::normalize_brightness;
pub use grain::{GrainSynthesizer, POSITIONAL_CEILING, POSITIONAL_FLOOR};
pub use tone::stylize;
pub use types::{GrainModel, StyleProfile, ToneMode};
