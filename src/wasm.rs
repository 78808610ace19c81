//! WASM bindings for the browser editor.
//!
//! This module exposes slug generation and rendering to JavaScript via
//! wasm-bindgen so the editor can preview exactly what readers will see.

use wasm_bindgen::prelude::*;

use crate::document::{Document, stats};
use crate::render::HtmlConfig;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Generate the URL slug for a title.
#[wasm_bindgen(js_name = generateSlug)]
pub fn generate_slug(title: &str) -> String {
    crate::slug::generate_slug(title)
}

/// Render a document's JSON to an HTML fragment.
///
/// Fails only on invalid JSON; unknown or malformed blocks are skipped.
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html(json: &str) -> Result<String, JsValue> {
    let doc = Document::parse(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(crate::render::render_html(Some(&doc), &HtmlConfig::default()))
}

/// Count the visible words of a document's JSON.
#[wasm_bindgen(js_name = wordCount)]
pub fn word_count(json: &str) -> Result<usize, JsValue> {
    let doc = Document::parse(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(stats::word_count(&doc))
}

/// Estimated read time of a document's JSON, in minutes.
#[wasm_bindgen(js_name = readTimeMinutes)]
pub fn read_time_minutes(json: &str) -> Result<usize, JsValue> {
    let doc = Document::parse(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(stats::read_time_minutes(&doc))
}
