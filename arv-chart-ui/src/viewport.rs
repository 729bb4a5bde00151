//! Browser viewport helpers.

use arv_chart::layout::MAX_INNER_WIDTH;
use wasm_bindgen::JsValue;

/// Current viewport width in CSS pixels.
///
/// Falls back to the chart width cap when the window is unavailable.
pub fn viewport_width() -> f64 {
    let width: Option<JsValue> = web_sys::window().and_then(|w| w.inner_width().ok());
    width.and_then(|v| v.as_f64()).unwrap_or(MAX_INNER_WIDTH)
}
