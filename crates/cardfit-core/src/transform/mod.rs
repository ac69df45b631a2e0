//! Geometric normalization stages: content detection, trimming, aspect fitting.
//!
//! Each stage is a pure function of its input image and parameters. None of
//! them resample; pixels are only copied or surrounded by transparent
//! RGBA (0, 0, 0, 0) padding.
//!
//! # Stage Order
//!
//! 1. [`find_content_bounds`] - smallest box around alpha > 0, plus slack
//! 2. [`trim_to_content`] - crop to the box, re-pad 10% of each dimension
//! 3. [`fit_aspect`] - widen with transparent columns up to the target ratio
//!
//! Stages 1 and 2 are optional; see [`crate::pipeline`].
//!
//! # Coordinate System
//!
//! - Boxes are half-open: `top..bottom`, `left..right`
//! - Ratios are height:width
//! - Origin is top-left corner

mod aspect;
mod bounds;
mod trim;

pub use aspect::{aspect_padding, fit_aspect, AspectRatio};
pub use bounds::{find_content_bounds, find_tight_bounds, BoundingBox};
pub use trim::{crop_to_bounds, pad_uniform, proportional_padding, trim_to_content};
