//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode RGBA pixel data to PNG bytes
//! - [`encode_png_from_image`] - Encode a JsCardImage to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_png_from_image, normalize_card } from '@cardfit/wasm';
//!
//! const normalized = normalize_card(card, config);
//! const png = encode_png_from_image(normalized);
//! const url = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::{js_error, JsCardImage};
use cardfit_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(js_error)
}

/// Encode a JsCardImage to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsCardImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_card_png(&image.to_card()).map_err(js_error)
}
