//! cardfit Core - Card artwork normalization library
//!
//! This crate turns card art with arbitrary canvas size and transparent
//! margins into a canonical padded form: trim to the visible content,
//! re-pad proportionally, then widen to a fixed height:width ratio.
//! Alpha is the only content signal.

pub mod decode;
pub mod encode;
mod error;
pub mod pipeline;
pub mod transform;

pub use decode::{AlphaPolicy, CardImage};
pub use error::NormalizeError;
pub use pipeline::{needs_normalization, normalize, normalize_with_report, Normalized};
pub use transform::{AspectRatio, BoundingBox};

/// Parameters for the normalization pipeline.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Height:width ratio that outputs must not exceed
    pub target_ratio: AspectRatio,
    /// Border added after cropping, as a fraction of each cropped dimension
    pub trim_padding_fraction: f64,
    /// Pixels of margin added around the detected content box
    pub bbox_slack: u32,
    /// Detect content and trim before the aspect fit
    pub trim: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            target_ratio: AspectRatio::CARD,
            trim_padding_fraction: 0.1,
            bbox_slack: 1,
            trim: true,
        }
    }
}

impl NormalizeConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if !self.trim_padding_fraction.is_finite() || self.trim_padding_fraction < 0.0 {
            return Err(NormalizeError::InvalidConfig(format!(
                "trim_padding_fraction must be a non-negative number, got {}",
                self.trim_padding_fraction
            )));
        }
        if self.target_ratio.height == 0 || self.target_ratio.width == 0 {
            return Err(NormalizeError::InvalidConfig(format!(
                "target_ratio terms must be positive, got {}",
                self.target_ratio
            )));
        }
        Ok(())
    }
}
