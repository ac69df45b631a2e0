//! Image decoding boundary for cardfit.
//!
//! This module provides functionality for:
//! - Decoding PNG card artwork into RGBA8 pixel buffers
//! - Rejecting (or explicitly converting) sources without an alpha channel
//!
//! # Architecture
//!
//! Decoding happens before any transform runs. Every transform in
//! [`crate::transform`] works on a [`CardImage`] and never touches encoded
//! bytes. All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use cardfit_core::decode::{decode_png, AlphaPolicy};
//!
//! let bytes = std::fs::read("reimu.png").unwrap();
//! let image = decode_png(&bytes, AlphaPolicy::Require).unwrap();
//! println!("Decoded {}x{} card", image.width, image.height);
//! ```

mod png;
mod types;

pub use png::{decode_png, has_alpha};
pub use types::{AlphaPolicy, CardImage, DecodeError, CHANNELS};
