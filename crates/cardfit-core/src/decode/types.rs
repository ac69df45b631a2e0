//! Core types for card image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Error types for card image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The source has no alpha channel and the policy requires one.
    #[error("Image has no alpha channel")]
    MissingAlpha,
}

/// How to treat sources that carry no alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlphaPolicy {
    /// Reject the source with [`DecodeError::MissingAlpha`].
    #[default]
    Require,
    /// Convert to RGBA with every pixel fully opaque.
    Opaque,
}

/// A decoded card image with RGBA8 pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl CardImage {
    /// Create a new CardImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len() as u64,
            width as u64 * height as u64 * CHANNELS as u64,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a fully transparent canvas, every pixel RGBA (0, 0, 0, 0).
    pub fn transparent(width: u32, height: u32) -> Self {
        let mut image = Self {
            width,
            height,
            pixels: Vec::new(),
        };
        image.pixels.resize(image.byte_len(), 0);
        image
    }

    /// Create a CardImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Byte length of one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// RGBA value at (x, y). Panics when out of bounds.
    #[inline]
    pub fn pixel_at(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = y as usize * self.stride() + x as usize * CHANNELS;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Alpha value at (x, y). Panics when out of bounds.
    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.stride() + x as usize * CHANNELS + 3]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Expected RGBA buffer length for the current dimensions.
    fn byte_len(&self) -> usize {
        self.pixel_count() as usize * CHANNELS
    }

    /// Height over width.
    pub fn ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// Check the shape invariants every transform relies on.
    ///
    /// Fails on zero width or height, and on any buffer that is not exactly
    /// four channels per pixel (which is how a missing alpha channel shows up).
    pub fn validate(&self) -> Result<(), crate::NormalizeError> {
        if self.width == 0 || self.height == 0 {
            return Err(crate::NormalizeError::InvalidImage {
                reason: format!("zero dimension {}x{}", self.width, self.height),
            });
        }
        let expected = self.byte_len();
        if self.pixels.len() != expected {
            return Err(crate::NormalizeError::InvalidImage {
                reason: format!(
                    "expected {expected} bytes for {}x{} RGBA, got {}",
                    self.width,
                    self.height,
                    self.pixels.len()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NormalizeError;

    #[test]
    fn test_card_image_creation() {
        let img = CardImage::new(100, 50, vec![0u8; 100 * 50 * 4]);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.stride(), 400);
        assert!(img.validate().is_ok());
    }

    #[test]
    fn test_transparent_canvas() {
        let img = CardImage::transparent(3, 2);
        assert_eq!(img.pixels.len(), 24);
        assert!(img.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_accessors() {
        let mut img = CardImage::transparent(2, 2);
        // (1, 1) is the last pixel
        img.pixels[12..16].copy_from_slice(&[10, 20, 30, 40]);

        assert_eq!(img.pixel_at(1, 1), [10, 20, 30, 40]);
        assert_eq!(img.alpha_at(1, 1), 40);
        assert_eq!(img.alpha_at(0, 0), 0);
    }

    #[test]
    fn test_validate_zero_dimension() {
        let img = CardImage::new(0, 10, vec![]);
        assert_eq!(img.pixel_count(), 0);
        assert!(matches!(
            img.validate(),
            Err(NormalizeError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_validate_rgb_buffer_rejected() {
        // 3 channels per pixel: no alpha
        let img = CardImage {
            width: 4,
            height: 4,
            pixels: vec![255u8; 4 * 4 * 3],
        };
        assert!(matches!(
            img.validate(),
            Err(NormalizeError::InvalidImage { .. })
        ));
    }

    #[test]
    fn test_rgba_image_conversion() {
        let rgba = image::RgbaImage::from_pixel(5, 3, image::Rgba([1, 2, 3, 4]));
        let card = CardImage::from_rgba_image(rgba);
        assert_eq!((card.width, card.height), (5, 3));
        assert_eq!(card.pixel_at(4, 2), [1, 2, 3, 4]);

        let back = card.to_rgba_image().unwrap();
        assert_eq!(back.get_pixel(0, 0).0, [1, 2, 3, 4]);
    }

    #[test]
    fn test_ratio() {
        let img = CardImage::transparent(703, 1000);
        assert!((img.ratio() - 1000.0 / 703.0).abs() < 1e-12);
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::InvalidFormat.to_string(),
            "Invalid or unsupported image format"
        );
        assert_eq!(
            DecodeError::MissingAlpha.to_string(),
            "Image has no alpha channel"
        );
    }
}
