//! # Practime WASM Module
//!
//! WebAssembly bindings so a browser form can hand its numbers to the engine
//! and format the result itself.
//!
//! - `api`: wasm-bindgen exported functions for JS interop
//! - `utils`: error conversion helpers

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

pub mod api;
pub mod utils;

pub use api::calculate::*;
