//! Style profile types

use std::fmt;

use crate::photo_pipeline::common::error::{CaptureError, Result};

/// Per-pixel color transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneMode {
    /// Luminance-aware blend toward a sepia target color
    Sepia,
    /// Rec. 601 grayscale re-tinted warm
    DesaturateTint,
}

/// Film grain noise source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainModel {
    /// One random offset per pixel in `[-intensity, intensity]`, clamped to `[0, 255]`
    UniformRandom,
    /// Deterministic sine/hash noise scaled by luminance, clamped to `[32, 223]`
    FrequencyPositional,
}

/// Selects the stylization chain for one capture.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub name: String,
    pub tone_mode: ToneMode,
    pub grain_model: GrainModel,
    /// Average luminance the image is darkened toward, in `[0, 1]`
    pub target_brightness: f32,
    /// Half-range for uniform grain, amplitude multiplier for positional grain
    pub grain_intensity: f32,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self::photo_mode()
    }
}

impl StyleProfile {
    /// Handheld camera look: warm sepia, coarse random grain.
    pub fn camera() -> Self {
        Self {
            name: "camera".to_string(),
            tone_mode: ToneMode::Sepia,
            grain_model: GrainModel::UniformRandom,
            target_brightness: 0.45,
            grain_intensity: 16.0,
        }
    }

    /// Photo mode look: tinted monochrome, positional grain that never
    /// reaches pure black or white.
    pub fn photo_mode() -> Self {
        Self {
            name: "photo_mode".to_string(),
            tone_mode: ToneMode::DesaturateTint,
            grain_model: GrainModel::FrequencyPositional,
            target_brightness: 0.5,
            grain_intensity: 24.0,
        }
    }

    /// Looks a preset up by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "camera" => Some(Self::camera()),
            "photo_mode" | "photomode" | "photo-mode" => Some(Self::photo_mode()),
            _ => None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_tone_mode(mut self, tone_mode: ToneMode) -> Self {
        self.tone_mode = tone_mode;
        self
    }

    pub fn with_grain_model(mut self, grain_model: GrainModel) -> Self {
        self.grain_model = grain_model;
        self
    }

    pub fn with_target_brightness(mut self, target: f32) -> Self {
        self.target_brightness = target;
        self
    }

    pub fn with_grain_intensity(mut self, intensity: f32) -> Self {
        self.grain_intensity = intensity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.target_brightness) {
            return Err(CaptureError::InvalidProfile(format!(
                "{}: target brightness {} outside [0, 1]",
                self.name, self.target_brightness
            )));
        }
        if !self.grain_intensity.is_finite() || self.grain_intensity < 0.0 {
            return Err(CaptureError::InvalidProfile(format!(
                "{}: grain intensity {} must be finite and non-negative",
                self.name, self.grain_intensity
            )));
        }
        Ok(())
    }
}

impl fmt::Display for StyleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?}, {:?} grain x{}, target {})",
            self.name, self.tone_mode, self.grain_model, self.grain_intensity, self.target_brightness
        )
    }
}
