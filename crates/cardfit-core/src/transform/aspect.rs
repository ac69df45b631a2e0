//! Aspect fitting by symmetric transparent column padding.
//!
//! An image taller than the target ratio is widened with transparent columns
//! split evenly between left and right. Anything at or below the target ratio
//! passes through untouched. Height never changes and nothing is cropped.
//!
//! Ratio comparisons use integer cross-multiplication, so an image whose
//! dimensions are exactly the target ratio is never padded by float noise.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::decode::CardImage;
use crate::NormalizeError;

use super::pad_uniform;

/// Target shape expressed as height:width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub height: u32,
    pub width: u32,
}

impl AspectRatio {
    /// Standard card art, 1000:703.
    pub const CARD: AspectRatio = AspectRatio {
        height: 1000,
        width: 703,
    };

    /// Create a ratio; both terms must be positive.
    pub fn new(height: u32, width: u32) -> Result<Self, NormalizeError> {
        if height == 0 || width == 0 {
            return Err(NormalizeError::InvalidConfig(format!(
                "aspect ratio terms must be positive, got {height}:{width}"
            )));
        }
        Ok(Self { height, width })
    }

    /// Height divided by width.
    pub fn value(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// True when `height / width` of the image is strictly above this ratio.
    pub fn is_exceeded_by(&self, width: u32, height: u32) -> bool {
        height as u64 * self.width as u64 > width as u64 * self.height as u64
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::CARD
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.height, self.width)
    }
}

impl FromStr for AspectRatio {
    type Err = NormalizeError;

    /// Parse `"H:W"` or `"H/W"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NormalizeError::InvalidConfig(format!("invalid aspect ratio '{s}'"));

        let (h, w) = s.split_once(|c| c == ':' || c == '/').ok_or_else(invalid)?;
        let height = h.trim().parse::<u32>().map_err(|_| invalid())?;
        let width = w.trim().parse::<u32>().map_err(|_| invalid())?;
        Self::new(height, width)
    }
}

/// Transparent columns to add on each side so that `height / width <= target`.
///
/// Equals `ceil((height / target - width) / 2)`, computed exactly in integers.
/// Returns 0 when the image already satisfies the target.
///
/// # Errors
///
/// * `InvalidConfig` if the per-side padding does not fit in a `u32`
pub fn aspect_padding(width: u32, height: u32, target: AspectRatio) -> Result<u32, NormalizeError> {
    if target.height == 0 || !target.is_exceeded_by(width, height) {
        return Ok(0);
    }
    // desired_width - width = (height * tw - width * th) / th
    let excess = height as u64 * target.width as u64 - width as u64 * target.height as u64;
    let pad = excess.div_ceil(2 * target.height as u64);
    u32::try_from(pad).map_err(|_| {
        NormalizeError::InvalidConfig(format!(
            "fitting {width}x{height} to {target} needs {pad} columns per side"
        ))
    })
}

/// Widen the image with transparent columns until it fits `target`.
///
/// Left and right always receive the same number of columns, so the output
/// width is `width + 2 * pad` and the image stays horizontally centered.
/// Images already at or below the target ratio are returned unchanged.
///
/// # Errors
///
/// * `InvalidImage` if the image is empty or not RGBA
/// * `InvalidConfig` if either ratio term is zero or the padding overflows
/// * `InvalidImage` if the widened image would be too large to address
pub fn fit_aspect(image: &CardImage, target: AspectRatio) -> Result<CardImage, NormalizeError> {
    image.validate()?;
    AspectRatio::new(target.height, target.width)?;

    let pad = aspect_padding(image.width, image.height, target)?;
    if pad == 0 {
        return Ok(image.clone());
    }
    pad_uniform(image, pad, 0)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
