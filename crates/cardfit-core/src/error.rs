//! Errors raised by the normalization transforms.

use thiserror::Error;

/// Error types for content detection, trimming and aspect fitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Zero width/height or a pixel buffer that is not RGBA.
    #[error("Invalid image: {reason}")]
    InvalidImage { reason: String },

    /// Every pixel is fully transparent.
    #[error("No visible content: every pixel has zero alpha")]
    NoVisibleContent,

    /// The box is empty or does not fit inside the image.
    #[error("Degenerate bounding box: top={top}, bottom={bottom}, left={left}, right={right}")]
    DegenerateBoundingBox {
        top: u32,
        bottom: u32,
        left: u32,
        right: u32,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
