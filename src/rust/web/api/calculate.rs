//! Calculation API for WASM

use wasm_bindgen::prelude::*;

use crate::engine::practice::{
    RawPracticeInput, calculate as calculate_practice, step_schedule, sweep_step_sizes, validate,
};
use crate::web::utils::errors::{to_js_error, validation_error};

fn parse_input(options: JsValue) -> Result<RawPracticeInput, JsValue> {
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| to_js_error(format!("Invalid options: {}", e)))
}

/// Compute both totals for `{ startTempo, endTempo, stepSize, beatsPerPhrase, repetitions, sets }`.
#[wasm_bindgen]
pub fn calculate(options: JsValue) -> Result<JsValue, JsValue> {
    let raw = parse_input(options)?;
    let result = calculate_practice(&raw).map_err(|e| validation_error(&e))?;
    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| to_js_error(format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn schedule(options: JsValue) -> Result<JsValue, JsValue> {
    let raw = parse_input(options)?;
    let params = validate(&raw).map_err(|e| validation_error(&e))?;
    serde_wasm_bindgen::to_value(&step_schedule(&params))
        .map_err(|e| to_js_error(format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn sweep(options: JsValue, step_sizes: Vec<f64>) -> Result<JsValue, JsValue> {
    let raw = parse_input(options)?;
    serde_wasm_bindgen::to_value(&sweep_step_sizes(&raw, &step_sizes))
        .map_err(|e| to_js_error(format!("Serialization error: {}", e)))
}
