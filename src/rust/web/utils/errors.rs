//! Error handling utilities for WASM

use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::engine::practice::ValidationError;

/// Convert a Rust error to JsValue
pub fn to_js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}", error))
}

#[derive(Serialize)]
struct JsValidationError {
    kind: String,
    message: String,
}

/// Validation failures go out as `{ kind, message }` so the page can pick
/// its own wording per kind.
pub fn validation_error(error: &ValidationError) -> JsValue {
    let payload = JsValidationError {
        kind: error.kind().to_string(),
        message: error.to_string(),
    };
    serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| to_js_error(error))
}
