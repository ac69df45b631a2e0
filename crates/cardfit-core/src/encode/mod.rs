//! Image encoding boundary for cardfit.
//!
//! Normalized cards are written back as RGBA PNG. The format is fixed;
//! there is no codec or quality selection.
//!
//! # Examples
//!
//! ```ignore
//! use cardfit_core::encode::encode_png;
//!
//! let pixels = vec![0u8; 100 * 100 * 4]; // Transparent canvas
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_card_png, encode_png, EncodeError};
