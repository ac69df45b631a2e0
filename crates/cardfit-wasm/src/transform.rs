//! WASM bindings for the normalization stages.
//!
//! The card UI can run the whole pipeline with [`normalize_card`] or call the
//! stages individually to preview the detected content box.

use cardfit_core::transform::{
    find_content_bounds as core_find_bounds, fit_aspect as core_fit, trim_to_content as core_trim,
};
use cardfit_core::{normalize_with_report, AspectRatio, BoundingBox};
use wasm_bindgen::prelude::*;

use crate::config::JsNormalizeConfig;
use crate::console_debug;
use crate::types::{js_error, JsCardImage};

/// Find the content bounding box of a card.
///
/// # Arguments
///
/// * `image` - Source RGBA image
/// * `slack` - Extra pixels of margin on every side (usually 1)
///
/// # Returns
///
/// A plain object `{ top, bottom, left, right }` with half-open bounds.
/// Throws if the image is fully transparent.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { top, bottom, left, right } = find_content_bounds(card, 1);
/// ctx.strokeRect(left, top, right - left, bottom - top);
/// ```
#[wasm_bindgen]
pub fn find_content_bounds(image: &JsCardImage, slack: u32) -> Result<JsValue, JsValue> {
    let bounds = core_find_bounds(&image.to_card(), slack).map_err(js_error)?;
    serde_wasm_bindgen::to_value(&bounds).map_err(js_error)
}

/// Crop a card to the given half-open box and re-pad it proportionally.
///
/// # Arguments
///
/// * `image` - Source RGBA image
/// * `top`, `bottom`, `left`, `right` - Box from `find_content_bounds`
/// * `padding_fraction` - Border as a fraction of each cropped dimension (usually 0.1)
#[wasm_bindgen]
pub fn trim_to_content(
    image: &JsCardImage,
    top: u32,
    bottom: u32,
    left: u32,
    right: u32,
    padding_fraction: f64,
) -> Result<JsCardImage, JsValue> {
    let bounds = BoundingBox::new(top, bottom, left, right);
    core_trim(&image.to_card(), &bounds, padding_fraction)
        .map(JsCardImage::from_card)
        .map_err(js_error)
}

/// Widen a card with transparent columns until `height / width <= ratio_height / ratio_width`.
///
/// Cards already wide enough come back unchanged.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const fitted = fit_aspect(card, 1000, 703);
/// ```
#[wasm_bindgen]
pub fn fit_aspect(
    image: &JsCardImage,
    ratio_height: u32,
    ratio_width: u32,
) -> Result<JsCardImage, JsValue> {
    let target = AspectRatio::new(ratio_height, ratio_width).map_err(js_error)?;
    core_fit(&image.to_card(), target)
        .map(JsCardImage::from_card)
        .map_err(js_error)
}

/// Run the full pipeline: trim (if enabled) then aspect fit.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const config = new JsNormalizeConfig();
/// const card = normalize_card(decode_png(bytes, false), config);
/// ```
#[wasm_bindgen]
pub fn normalize_card(
    image: &JsCardImage,
    config: &JsNormalizeConfig,
) -> Result<JsCardImage, JsValue> {
    let report = normalize_with_report(&image.to_card(), config.inner()).map_err(js_error)?;

    console_debug(&format!(
        "cardfit: {}x{} -> {}x{} (bounds {:?}, aspect pad {})",
        image.width(),
        image.height(),
        report.image.width,
        report.image.height,
        report.bounds,
        report.aspect_pad
    ));

    Ok(JsCardImage::from_card(report.image))
}
