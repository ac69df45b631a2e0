//! cardfit WASM - WebAssembly bindings for cardfit
//!
//! This crate exposes the cardfit-core normalization pipeline to the card
//! game's JavaScript/TypeScript UI, so artwork can be trimmed and fitted
//! client-side.
//!
//! # Module Structure
//!
//! - `config` - Normalization settings (target ratio, padding, slack, trim)
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - PNG decoding bindings
//! - `encode` - PNG encoding bindings
//! - `transform` - Bounds detection, trim, aspect fit and the full pipeline
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_png, normalize_card, JsNormalizeConfig } from '@cardfit/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const card = normalize_card(decode_png(bytes, false), new JsNormalizeConfig());
//! console.log(`Normalized to ${card.width}x${card.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod config;
mod decode;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use config::JsNormalizeConfig;
pub use decode::{decode_png, has_alpha};
pub use encode::{encode_png, encode_png_from_image};
pub use transform::{find_content_bounds, fit_aspect, normalize_card, trim_to_content};
pub use types::JsCardImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Write a debug line to the browser console.
pub(crate) fn console_debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(message));

    // Imported JS functions panic off wasm32
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
