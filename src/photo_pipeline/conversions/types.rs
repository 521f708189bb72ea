//! Photo pipeline configuration types

use std::path::PathBuf;

use crate::photo_pipeline::persist::DEFAULT_OUTPUT_DIR;
use crate::photo_pipeline::style::types::StyleProfile;

/// Configuration for turning rendered frames into saved photos
#[derive(Debug, Clone)]
pub struct PhotoConfig {
    /// Directory photos are written to, created on first save
    pub output_dir: PathBuf,
    /// Tone, grain and brightness settings
    pub profile: StyleProfile,
    /// Box-filter factor applied after the center crop
    pub downsample_factor: u32,
    /// Whether to reject empty or oversized frames before decoding
    pub validate_dimensions: bool,
    /// Largest accepted frame edge when validating
    pub max_dimension: Option<u32>,
    /// Length of the shutter animation in seconds
    pub shutter_duration: f32,
}

impl Default for PhotoConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            profile: StyleProfile::photo_mode(),
            downsample_factor: 2,
            validate_dimensions: true,
            max_dimension: Some(16384),
            shutter_duration: 0.15,
        }
    }
}

impl PhotoConfig {
    pub fn builder() -> PhotoConfigBuilder {
        PhotoConfigBuilder::default()
    }
}

/// Builder for PhotoConfig
#[derive(Default)]
pub struct PhotoConfigBuilder {
    output_dir: Option<PathBuf>,
    profile: Option<StyleProfile>,
    downsample_factor: Option<u32>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
    shutter_duration: Option<f32>,
}

impl PhotoConfigBuilder {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn profile(mut self, profile: StyleProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Values below 1 are raised to 1.
    pub fn downsample_factor(mut self, factor: u32) -> Self {
        self.downsample_factor = Some(factor.max(1));
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn shutter_duration(mut self, seconds: f32) -> Self {
        self.shutter_duration = Some(seconds);
        self
    }

    pub fn build(self) -> PhotoConfig {
        let default = PhotoConfig::default();
        PhotoConfig {
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            profile: self.profile.unwrap_or(default.profile),
            downsample_factor: self.downsample_factor.unwrap_or(default.downsample_factor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            shutter_duration: self.shutter_duration.unwrap_or(default.shutter_duration),
        }
    }
}
