//! The normalization pipeline: optional trim, then aspect fit.
//!
//! With `trim` enabled the order is find bounds → trim → fit. With it
//! disabled the decoded image goes straight to the aspect fit. Either way a
//! card either completes every stage or fails; there is no partial output.

use tracing::debug;

use crate::decode::CardImage;
use crate::transform::{
    aspect_padding, find_content_bounds, fit_aspect, trim_to_content, BoundingBox,
};
use crate::{NormalizeConfig, NormalizeError};

/// A normalized card plus the geometry that produced it.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub image: CardImage,
    /// Detected content box in source coordinates, `None` when trimming is off.
    pub bounds: Option<BoundingBox>,
    /// Transparent columns added on each side by the aspect fit.
    pub aspect_pad: u32,
}

/// Run the full pipeline and return only the output image.
pub fn normalize(image: &CardImage, config: &NormalizeConfig) -> Result<CardImage, NormalizeError> {
    normalize_with_report(image, config).map(|n| n.image)
}

/// Run the full pipeline and report the detected box and aspect padding.
///
/// # Errors
///
/// * `InvalidConfig` if the configuration is out of range
/// * `InvalidImage` if the image is empty or not RGBA
/// * `NoVisibleContent` if trimming is on and the canvas is fully transparent
/// * `DegenerateBoundingBox` if the detected box is empty after clamping
pub fn normalize_with_report(
    image: &CardImage,
    config: &NormalizeConfig,
) -> Result<Normalized, NormalizeError> {
    config.validate()?;
    image.validate()?;

    let (trimmed, bounds) = if config.trim {
        let bounds = find_content_bounds(image, config.bbox_slack)?;
        debug!(
            top = bounds.top,
            bottom = bounds.bottom,
            left = bounds.left,
            right = bounds.right,
            "Content bounds"
        );
        let trimmed = trim_to_content(image, &bounds, config.trim_padding_fraction)?;
        debug!(
            "Trimmed {}x{} -> {}x{}",
            image.width, image.height, trimmed.width, trimmed.height
        );
        (trimmed, Some(bounds))
    } else {
        (image.clone(), None)
    };

    let aspect_pad = aspect_padding(trimmed.width, trimmed.height, config.target_ratio)?;
    let fitted = fit_aspect(&trimmed, config.target_ratio)?;
    debug!(
        "Aspect fit to {}: pad_cols={}, final {}x{}",
        config.target_ratio, aspect_pad, fitted.width, fitted.height
    );

    Ok(Normalized {
        image: fitted,
        bounds,
        aspect_pad,
    })
}

/// Whether running the pipeline could change the image.
///
/// Trimming always rewrites the canvas. Without it, an image already at or
/// below the target ratio comes back byte-identical, so a batch driver can
/// copy the source file through instead of re-encoding. A padding that
/// cannot be computed counts as a change so the pipeline reports the error.
pub fn needs_normalization(image: &CardImage, config: &NormalizeConfig) -> bool {
    config.trim || !matches!(aspect_padding(image.width, image.height, config.target_ratio), Ok(0))
}
