//! Public API module for WASM exports

pub mod calculate;
