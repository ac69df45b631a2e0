//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_png`] - Decode card artwork bytes into RGBA
//! - [`has_alpha`] - Check whether the artwork carries transparency
//!
//! # Example
//!
//! ```typescript
//! import { decode_png, has_alpha } from '@cardfit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (!has_alpha(bytes)) {
//!   console.warn('Card has no transparency; trimming will keep the full canvas');
//! }
//! const card = decode_png(bytes, true);
//! ```

use cardfit_core::decode::{self, AlphaPolicy};
use wasm_bindgen::prelude::*;

use crate::types::{js_error, JsCardImage};

/// Decode card artwork from bytes.
///
/// # Arguments
///
/// * `bytes` - The raw PNG file bytes as a `Uint8Array`
/// * `allow_opaque` - Accept sources without alpha by making them fully opaque;
///   when false such sources throw
#[wasm_bindgen]
pub fn decode_png(bytes: &[u8], allow_opaque: bool) -> Result<JsCardImage, JsValue> {
    decode::decode_png(bytes, alpha_policy(allow_opaque))
        .map(JsCardImage::from_card)
        .map_err(js_error)
}

/// Check whether encoded artwork has an alpha channel, without decoding pixels.
#[wasm_bindgen]
pub fn has_alpha(bytes: &[u8]) -> Result<bool, JsValue> {
    decode::has_alpha(bytes).map_err(js_error)
}

fn alpha_policy(allow_opaque: bool) -> AlphaPolicy {
    if allow_opaque {
        AlphaPolicy::Opaque
    } else {
        AlphaPolicy::Require
    }
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_invalid_bytes() {
        assert!(decode_png(&[0x00, 0x01, 0x02], false).is_err());
    }
}
