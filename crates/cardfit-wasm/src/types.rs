//! WASM-compatible wrapper types for card image data.
//!
//! This module provides JavaScript-friendly types that wrap the core cardfit
//! types, handling the conversion between Rust and JavaScript data representations.

use cardfit_core::CardImage;
use wasm_bindgen::prelude::*;

/// A decoded RGBA card image for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. The layout matches `ImageData.data`, so
/// the result can be drawn to a canvas directly.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsCardImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsCardImage {
    /// Create a new JsCardImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsCardImage {
        JsCardImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCardImage {
    /// Wrap a core CardImage without copying.
    pub(crate) fn from_card(img: CardImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core CardImage.
    ///
    /// Note: This clones the pixel data. Shape is not checked here; every
    /// core transform validates its input.
    pub(crate) fn to_card(&self) -> CardImage {
        CardImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert any displayable error into a JavaScript string value.
pub(crate) fn js_error<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_card_image_creation() {
        let img = JsCardImage::new(100, 50, vec![0u8; 100 * 50 * 4]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_card_image_pixels() {
        let pixels = vec![255u8, 128, 64, 255, 0, 0, 0, 0]; // 2 RGBA pixels
        let img = JsCardImage::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_card_roundtrip() {
        let card = CardImage::transparent(20, 10);
        let js_img = JsCardImage::from_card(card.clone());
        assert_eq!(js_img.width(), 20);
        assert_eq!(js_img.byte_length(), 800);
        assert_eq!(js_img.to_card(), card);
    }
}
