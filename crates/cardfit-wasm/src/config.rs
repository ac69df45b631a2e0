//! Normalization settings WASM bindings.
//!
//! This module exposes `NormalizeConfig` so the card UI can pick a target
//! ratio per card set and persist the settings alongside it.

use cardfit_core::{AspectRatio, NormalizeConfig};
use wasm_bindgen::prelude::*;

use crate::types::js_error;

/// Normalization settings wrapper for JavaScript
#[wasm_bindgen]
pub struct JsNormalizeConfig {
    inner: NormalizeConfig,
}

#[wasm_bindgen]
impl JsNormalizeConfig {
    /// Create settings with the standard 1000:703 card ratio
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: NormalizeConfig::new(),
        }
    }

    /// Get the target ratio as "H:W"
    #[wasm_bindgen(getter)]
    pub fn target_ratio(&self) -> String {
        self.inner.target_ratio.to_string()
    }

    /// Set the target ratio from "H:W" or "H/W"
    pub fn set_target_ratio(&mut self, value: &str) -> Result<(), JsValue> {
        self.inner.target_ratio = value.parse::<AspectRatio>().map_err(js_error)?;
        Ok(())
    }

    /// Get the proportional padding fraction
    #[wasm_bindgen(getter)]
    pub fn trim_padding_fraction(&self) -> f64 {
        self.inner.trim_padding_fraction
    }

    /// Set the proportional padding fraction
    #[wasm_bindgen(setter)]
    pub fn set_trim_padding_fraction(&mut self, value: f64) {
        self.inner.trim_padding_fraction = value;
    }

    /// Get the bounding box slack in pixels
    #[wasm_bindgen(getter)]
    pub fn bbox_slack(&self) -> u32 {
        self.inner.bbox_slack
    }

    /// Set the bounding box slack in pixels
    #[wasm_bindgen(setter)]
    pub fn set_bbox_slack(&mut self, value: u32) {
        self.inner.bbox_slack = value;
    }

    /// Whether content trimming runs before the aspect fit
    #[wasm_bindgen(getter)]
    pub fn trim(&self) -> bool {
        self.inner.trim
    }

    /// Enable or disable content trimming
    #[wasm_bindgen(setter)]
    pub fn set_trim(&mut self, value: bool) {
        self.inner.trim = value;
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(js_error)
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<JsNormalizeConfig, JsValue> {
        let inner: NormalizeConfig = serde_wasm_bindgen::from_value(value).map_err(js_error)?;
        inner.validate().map_err(js_error)?;
        Ok(Self { inner })
    }
}

impl Default for JsNormalizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl JsNormalizeConfig {
    /// Get a reference to the inner config for use in normalize_card
    pub(crate) fn inner(&self) -> &NormalizeConfig {
        &self.inner
    }
}
